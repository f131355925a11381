/// We may eventually make this configurable
pub const INDENT_SPACER: &str = "  ";

/// Words which are reserved in at least one of the supported dialects and would therefore change
/// the meaning of a query if used as a bare identifier. Not exhaustive: only words which are
/// plausible as table or column names are listed.
pub const RESERVED_WORDS: &[&str] = &[
    "all", "and", "any", "array", "as", "asc", "between", "by", "case", "cast", "check", "collate",
    "column", "constraint", "create", "cross", "current", "default", "desc", "distinct", "else",
    "end", "exists", "false", "fetch", "for", "from", "full", "group", "having", "in", "inner",
    "interval", "into", "is", "join", "left", "like", "limit", "natural", "not", "null", "of",
    "offset", "on", "or", "order", "outer", "partition", "range", "right", "rows", "select",
    "set", "some", "table", "then", "to", "true", "union", "unique", "user", "using", "when",
    "where", "window", "with",
];
