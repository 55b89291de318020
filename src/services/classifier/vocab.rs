//! Closed word sets of the Arduino C++ dialect shown next to Synk commands.

pub const KEYWORDS: &[&str] = &[
    "void", "int", "long", "unsigned", "float", "char", "bool", "const", "if", "else", "while",
    "for", "return", "switch", "case", "break", "continue", "#include",
];

pub const BUILTINS: &[&str] = &[
    "setup",
    "loop",
    "pinMode",
    "digitalWrite",
    "digitalRead",
    "analogWrite",
    "analogRead",
    "delay",
    "millis",
    "Serial",
    "print",
    "println",
    "begin",
    "tone",
    "noTone",
    "map",
    "abs",
    "sqrt",
    "random",
    "LiquidCrystal_I2C",
    "Servo",
    "Ultrasonic",
    "Motor",
    "EEPROM",
    "INPUT",
    "OUTPUT",
    "HIGH",
    "LOW",
];
