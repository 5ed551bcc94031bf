//! Word lists backing the heuristic part-of-speech tagger.

/// Common English function words. Never treated as significant on their own.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "ain", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "an", "and", "another", "any", "anybody", "anyhow", "anyone", "anything",
    "anyway", "anywhere", "are", "aren", "around", "as", "at", "be", "became", "because",
    "become", "becomes", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "both", "but", "by", "can", "cannot", "could", "couldn",
    "d", "did", "didn", "do", "does", "doesn", "doing", "don", "done", "down", "during", "each",
    "either", "else", "elsewhere", "enough", "etc", "even", "ever", "every", "everybody",
    "everyone", "everything", "everywhere", "except", "few", "for", "former", "formerly",
    "from", "further", "furthermore", "had", "hadn", "has", "hasn", "have", "haven", "having",
    "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "ie", "if", "in", "indeed", "into", "is", "isn",
    "it", "its", "itself", "just", "least", "less", "ll", "m", "ma", "many", "may", "me",
    "meanwhile", "might", "mightn", "mine", "more", "moreover", "most", "mostly", "much",
    "must", "mustn", "my", "myself", "namely", "needn", "neither", "never", "nevertheless",
    "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "o", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "please", "quite",
    "rather", "re", "really", "s", "same", "shan", "she", "should", "shouldn", "shouldve",
    "since", "so", "some", "somebody", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "t", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "these", "they", "this", "those", "though", "through", "throughout", "thru",
    "thus", "to", "together", "too", "toward", "towards", "under", "unless", "until", "up",
    "upon", "us", "ve", "very", "via", "was", "wasn", "we", "were", "weren", "what",
    "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "won",
    "would", "wouldn", "y", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Words after which a bare verb form reads as a verb rather than a noun.
pub const VERB_CUES: &[&str] = &[
    "to", "how", "please", "i", "we", "you", "they", "can", "should", "must", "cannot",
    "don't", "dont", "not", "lets", "let's",
];

/// Base forms of verbs common in engineering questions.
pub const VERBS: &[&str] = &[
    "add", "allow", "analyze", "apply", "approve", "archive", "assign", "authenticate",
    "authorize", "backup", "balance", "benchmark", "block", "boot", "break", "build", "cache",
    "call", "cancel", "change", "check", "clean", "clear", "clone", "close", "commit",
    "compare", "compile", "compress", "configure", "connect", "contain", "convert", "copy",
    "crash", "create", "debug", "decode", "decrypt", "define", "delete", "deploy", "describe",
    "design", "destroy", "detect", "disable", "discover", "download", "drop", "edit", "enable",
    "encode", "encrypt", "ensure", "estimate", "execute", "expire", "export", "extend",
    "extract", "fail", "fetch", "filter", "find", "fix", "flush", "fork", "format", "generate",
    "get", "grant", "handle", "hire", "host", "identify", "ignore", "implement", "import",
    "improve", "index", "initialize", "inject", "install", "integrate", "invite", "join",
    "keep", "kill", "launch", "leak", "list", "load", "lock", "log", "login", "logout",
    "maintain", "manage", "measure", "merge", "migrate", "mock", "monitor", "move", "need",
    "notify", "onboard", "open", "optimize", "parse", "patch", "pay", "plan", "prepare",
    "prevent", "process", "profile", "protect", "provision", "publish", "pull", "push",
    "query", "read", "reboot", "rebuild", "receive", "recover", "reduce", "refactor",
    "refresh", "register", "release", "reload", "remove", "rename", "render", "replace",
    "replicate", "report", "request", "reset", "resolve", "restart", "restore", "retry",
    "return", "review", "revert", "rollback", "rotate", "route", "run", "save", "scale",
    "schedule", "scan", "search", "secure", "send", "serve", "set", "setup", "share", "ship",
    "show", "shut", "sign", "sort", "split", "start", "stop", "store", "stream", "submit",
    "subscribe", "support", "switch", "sync", "tag", "test", "throttle", "trace", "track",
    "train", "transfer", "translate", "trigger", "troubleshoot", "tune", "unlock", "update",
    "upgrade", "upload", "use", "validate", "verify", "view", "wait", "watch", "work", "write",
];

/// Irregular inflections mapped to their base form.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("broke", "break"),
    ("built", "build"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("found", "find"),
    ("got", "get"),
    ("gotten", "get"),
    ("kept", "keep"),
    ("made", "make"),
    ("ran", "run"),
    ("sent", "send"),
    ("shown", "show"),
    ("taken", "take"),
    ("took", "take"),
    ("went", "go"),
    ("written", "write"),
    ("wrote", "write"),
];

/// Known adjectives; suffix rules in the tagger cover the long tail.
pub const ADJECTIVES: &[&str] = &[
    "async", "available", "bad", "best", "big", "broken", "clean", "common", "complex",
    "concurrent", "correct", "critical", "current", "daily", "dead", "deep", "default",
    "different", "dirty", "distributed", "dynamic", "easy", "empty", "expensive", "external",
    "fast", "final", "free", "fresh", "full", "global", "good", "hard", "healthy", "heavy",
    "high", "hot", "idle", "internal", "invalid", "large", "late", "latest", "lazy", "legacy",
    "little", "live", "local", "long", "low", "main", "manual", "missing", "monthly", "new",
    "old", "open", "parallel", "personal", "private", "proper", "public", "quick", "random",
    "raw", "ready", "real", "recent", "remote", "safe", "secure", "serverless", "short",
    "simple", "slow", "small", "stale", "static", "strict", "strong", "stuck", "sync",
    "temporary", "unhealthy", "unstable", "valid", "weak", "weekly", "wrong",
];

/// Nouns whose trailing `s` is not a plural marker.
pub const INVARIANT_NOUNS: &[&str] = &[
    "analytics", "aws", "canvas", "chaos", "data", "devops", "dns", "docs", "ecs", "eks",
    "gas", "https", "jenkins", "k8s", "kubernetes", "news", "nodejs", "ops", "postgres",
    "redis", "series", "sms", "species", "stats", "status", "windows",
];

/// Plural forms ending in `-ches` whose singular keeps the trailing `e`.
pub const CHE_PLURALS: &[&str] = &["caches", "niches", "headaches", "avalanches"];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
