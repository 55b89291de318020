use serde_json::{json, Value};

use crate::error::CoreError;
use crate::model::Catalog;
use crate::services::catalog::hash;
use crate::services::{classifier, filter, qa, template};

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, key: &'static str) -> Result<&'a str, CoreError> {
    payload
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or(CoreError::MissingField(key))
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl ToString) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.to_string()
    })
    .to_string()
}

fn not_found(id: Value) -> String {
    ok(id, json!({ "found": false }))
}

/// Handles one request line and returns one response line.
pub fn handle(catalog: &Catalog, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    log::debug!("request {id} cmd={cmd_str}");

    match Command::from(cmd_str) {
        Command::Ping => ok(
            id,
            json!({ "message": "synk-core alive", "version": env!("CARGO_PKG_VERSION") }),
        ),

        Command::CatalogInfo => ok(
            id,
            json!({
                "categories": catalog.categories().len(),
                "items": catalog.item_count(),
                "fingerprint": hash::fingerprint(catalog),
            }),
        ),

        Command::CatalogList => ok(id, json!({ "categories": catalog.view() })),

        Command::CatalogFilter => {
            // A missing query is the same as an empty search box.
            let query = payload.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let view = filter::filter(catalog, query);
            ok(
                id,
                json!({ "total_items": view.item_count(), "categories": view }),
            )
        }

        Command::CatalogCategory => {
            let key = match get_str(payload, "id") {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            match catalog.category(key) {
                Some(category) => ok(id, json!({ "found": true, "category": category })),
                None => not_found(id),
            }
        }

        Command::CatalogItem => {
            let key = match get_str(payload, "id") {
                Ok(v) => v,
                Err(e) => return err(id, e),
            };
            match catalog.item(key) {
                Some((category, item)) => ok(
                    id,
                    json!({
                        "found": true,
                        "category_id": category.id,
                        "item": item,
                        "segments": template::render(&item.pattern),
                        "tokens": classifier::classify(&item.target),
                    }),
                ),
                None => not_found(id),
            }
        }

        Command::CatalogLint => ok(id, json!({ "issues": qa::run(catalog) })),

        Command::Render => match get_str(payload, "template") {
            Ok(t) => ok(id, json!({ "segments": template::render(t) })),
            Err(e) => err(id, e),
        },

        Command::Classify => match get_str(payload, "code") {
            Ok(code) => ok(id, json!({ "tokens": classifier::classify(code) })),
            Err(e) => err(id, e),
        },

        Command::Unknown => {
            log::warn!("unknown command `{cmd_str}`");
            err(id, "unknown command")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::store;

    fn call(req: Value) -> Value {
        let catalog = store::load_builtin().unwrap();
        let out = handle(&catalog, &req.to_string());
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn ping_echoes_id() {
        let res = call(json!({ "id": 7, "cmd": "ping" }));
        assert_eq!(res["id"], 7);
        assert_eq!(res["status"], "ok");
        assert_eq!(res["payload"]["message"], "synk-core alive");
    }

    #[test]
    fn invalid_json_is_rejected() {
        let catalog = store::load_builtin().unwrap();
        let res: Value = serde_json::from_str(&handle(&catalog, "{nope")).unwrap();
        assert_eq!(res["status"], "error");
        assert_eq!(res["message"], "invalid json");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let res = call(json!({ "id": "a", "cmd": "project.open" }));
        assert_eq!(res["status"], "error");
        assert_eq!(res["message"], "unknown command");
    }

    #[test]
    fn info_reports_counts() {
        let res = call(json!({ "id": 1, "cmd": "catalog.info" }));
        assert_eq!(res["payload"]["categories"], 21);
        assert_eq!(res["payload"]["items"], 90);
        assert_eq!(res["payload"]["fingerprint"].as_str().map(str::len), Some(64));
    }

    #[test]
    fn filter_returns_catalog_shape() {
        let res = call(json!({ "id": 1, "cmd": "catalog.filter", "payload": { "query": "servo" } }));
        let categories = res["payload"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["id"], "servo");
        assert_eq!(categories[0]["items"][0]["id"], "servo-use");
        assert_eq!(res["payload"]["total_items"], 2);
    }

    #[test]
    fn filter_without_query_lists_everything() {
        let res = call(json!({ "id": 1, "cmd": "catalog.filter" }));
        assert_eq!(res["payload"]["total_items"], 90);
    }

    #[test]
    fn item_comes_with_both_renderings() {
        let res = call(json!({ "id": 2, "cmd": "catalog.item", "payload": { "id": "set-var-millis" } }));
        let p = &res["payload"];
        assert_eq!(p["found"], true);
        assert_eq!(p["category_id"], "variables-math");
        assert_eq!(p["segments"][1], json!({ "kind": "placeholder", "text": "<var>" }));
        assert!(p["tokens"]
            .as_array()
            .unwrap()
            .contains(&json!({ "kind": "builtin", "text": "millis" })));
    }

    #[test]
    fn unknown_ids_are_not_found_not_errors() {
        let res = call(json!({ "id": 3, "cmd": "catalog.item", "payload": { "id": "nope" } }));
        assert_eq!(res["status"], "ok");
        assert_eq!(res["payload"]["found"], false);

        let res = call(json!({ "id": 4, "cmd": "catalog.category", "payload": { "id": "nope" } }));
        assert_eq!(res["payload"]["found"], false);
    }

    #[test]
    fn missing_field_is_named() {
        let res = call(json!({ "id": 5, "cmd": "classify", "payload": {} }));
        assert_eq!(res["status"], "error");
        assert_eq!(res["message"], "payload.code is required");
    }

    #[test]
    fn classify_and_render_round_trip_text() {
        let res = call(json!({ "id": 6, "cmd": "classify", "payload": { "code": "delay(<n> * 1000);" } }));
        let joined: String = res["payload"]["tokens"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["text"].as_str().unwrap())
            .collect();
        assert_eq!(joined, "delay(<n> * 1000);");

        let res = call(json!({ "id": 7, "cmd": "render", "payload": { "template": "" } }));
        assert_eq!(res["payload"]["segments"], json!([]));
    }

    #[test]
    fn lint_lists_issues() {
        let res = call(json!({ "id": 8, "cmd": "catalog.lint" }));
        assert_eq!(res["payload"]["issues"].as_array().map(Vec::len), Some(4));
    }
}
