/// Built-in category table: (category, words)
pub const BUILTIN_SETS: &[(&str, &[&str])] = &[
    ("Djur", &["hund", "katt", "fågel", "fisk", "häst", "lejon", "tiger", "björn"]),
    ("Frukt", &["äpple", "banan", "apelsin", "päron", "druva", "citron", "mango"]),
    ("Färger", &["röd", "grön", "blå", "gul", "svart", "vit", "lila", "orange"]),
    ("Kroppen", &["huvud", "arm", "ben", "fot", "hand", "öga", "näsa", "mun"]),
    ("Natur", &["sol", "måne", "stjärna", "träd", "blomma", "flod", "berg"]),
    (
        "Svenska Städer",
        &["stockholm", "göteborg", "malmö", "uppsala", "linköping", "örebro", "västerås"],
    ),
    (
        "Maträtter",
        &["köttbullar", "pannkakor", "smörgåstårta", "pyttipanna", "surströmming", "ärtsoppa"],
    ),
    ("I Hemmet", &["soffa", "bord", "stol", "säng", "lampa", "fönster", "dörr", "spegel"]),
    ("Yrken", &["läkare", "lärare", "polis", "brandman", "kock", "ingenjör", "snickare"]),
    (
        "Svårare Ord",
        &["programmering", "bibliotek", "miljöförstöring", "konstitution", "extraordinär", "vetenskap"],
    ),
];
