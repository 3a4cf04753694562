//! Protocol enumerations.
//!
//! Every enumeration is open: a value outside the published set decodes and
//! re-encodes unchanged, and [`SymbolKind::is_known`]-style helpers let
//! callers opt into strict validation.

lsp_string_enum! {
    /// Predefined semantic token types.
    pub struct SemanticTokenTypes {
        const NAMESPACE = "namespace";
        /// Generic type; use when none of the specific kinds apply.
        const TYPE = "type";
        const CLASS = "class";
        const ENUM = "enum";
        const INTERFACE = "interface";
        const STRUCT = "struct";
        const TYPE_PARAMETER = "typeParameter";
        const PARAMETER = "parameter";
        const VARIABLE = "variable";
        const PROPERTY = "property";
        const ENUM_MEMBER = "enumMember";
        const EVENT = "event";
        const FUNCTION = "function";
        const METHOD = "method";
        const MACRO = "macro";
        const KEYWORD = "keyword";
        const MODIFIER = "modifier";
        const COMMENT = "comment";
        const STRING = "string";
        const NUMBER = "number";
        const REGEXP = "regexp";
        const OPERATOR = "operator";
        const DECORATOR = "decorator";
        const LABEL = "label";
    }
}

lsp_string_enum! {
    /// Predefined semantic token modifiers.
    pub struct SemanticTokenModifiers {
        const DECLARATION = "declaration";
        const DEFINITION = "definition";
        const READONLY = "readonly";
        const STATIC = "static";
        const DEPRECATED = "deprecated";
        const ABSTRACT = "abstract";
        const ASYNC = "async";
        const MODIFICATION = "modification";
        const DOCUMENTATION = "documentation";
        const DEFAULT_LIBRARY = "defaultLibrary";
    }
}

lsp_string_enum! {
    /// The kind of a pulled document diagnostic report.
    pub struct DocumentDiagnosticReportKind {
        /// A report containing every diagnostic of the document.
        const FULL = "full";
        /// A report stating nothing changed since the previous result.
        const UNCHANGED = "unchanged";
    }
}

lsp_enum! {
    /// Error codes defined by JSON-RPC.
    pub struct ErrorCodes(i32) {
        const PARSE_ERROR = -32700;
        const INVALID_REQUEST = -32600;
        const METHOD_NOT_FOUND = -32601;
        const INVALID_PARAMS = -32602;
        const INTERNAL_ERROR = -32603;
        /// A request arrived before `initialize`.
        const SERVER_NOT_INITIALIZED = -32002;
        const UNKNOWN_ERROR_CODE = -32001;
    }
}

lsp_enum! {
    /// Error codes reserved by the Language Server Protocol.
    pub struct LspErrorCodes(i32) {
        /// The request was syntactically valid but failed.
        const REQUEST_FAILED = -32803;
        /// The server cancelled the request.
        const SERVER_CANCELLED = -32802;
        /// The document changed while the request was being served.
        const CONTENT_MODIFIED = -32801;
        /// The client cancelled the request.
        const REQUEST_CANCELLED = -32800;
    }
}

lsp_string_enum! {
    /// Predefined folding range kinds.
    pub struct FoldingRangeKind {
        const COMMENT = "comment";
        const IMPORTS = "imports";
        const REGION = "region";
    }
}

lsp_enum! {
    /// A symbol kind.
    pub struct SymbolKind(u32) {
        const FILE = 1;
        const MODULE = 2;
        const NAMESPACE = 3;
        const PACKAGE = 4;
        const CLASS = 5;
        const METHOD = 6;
        const PROPERTY = 7;
        const FIELD = 8;
        const CONSTRUCTOR = 9;
        const ENUM = 10;
        const INTERFACE = 11;
        const FUNCTION = 12;
        const VARIABLE = 13;
        const CONSTANT = 14;
        const STRING = 15;
        const NUMBER = 16;
        const BOOLEAN = 17;
        const ARRAY = 18;
        const OBJECT = 19;
        const KEY = 20;
        const NULL = 21;
        const ENUM_MEMBER = 22;
        const STRUCT = 23;
        const EVENT = 24;
        const OPERATOR = 25;
        const TYPE_PARAMETER = 26;
    }
}

lsp_enum! {
    /// Extra annotations that tweak the rendering of a symbol.
    pub struct SymbolTag(u32) {
        const DEPRECATED = 1;
    }
}

lsp_string_enum! {
    /// Scope within which a moniker is unique.
    pub struct UniquenessLevel {
        const DOCUMENT = "document";
        const PROJECT = "project";
        const GROUP = "group";
        const SCHEME = "scheme";
        const GLOBAL = "global";
    }
}

lsp_string_enum! {
    /// The moniker kind.
    pub struct MonikerKind {
        const IMPORT = "import";
        const EXPORT = "export";
        const LOCAL = "local";
    }
}

lsp_enum! {
    /// Inlay hint kinds.
    pub struct InlayHintKind(u32) {
        const TYPE = 1;
        const PARAMETER = 2;
    }
}

lsp_enum! {
    /// The message type of a `window/showMessage` or `window/logMessage`.
    pub struct MessageType(u32) {
        const ERROR = 1;
        const WARNING = 2;
        const INFO = 3;
        const LOG = 4;
        const DEBUG = 5;
    }
}

lsp_enum! {
    /// How a client synchronises document changes with the server.
    pub struct TextDocumentSyncKind(u32) {
        const NONE = 0;
        const FULL = 1;
        const INCREMENTAL = 2;
    }
}

lsp_enum! {
    /// Why a document is being saved.
    pub struct TextDocumentSaveReason(u32) {
        const MANUAL = 1;
        const AFTER_DELAY = 2;
        const FOCUS_OUT = 3;
    }
}

lsp_enum! {
    /// The kind of a completion entry.
    pub struct CompletionItemKind(u32) {
        const TEXT = 1;
        const METHOD = 2;
        const FUNCTION = 3;
        const CONSTRUCTOR = 4;
        const FIELD = 5;
        const VARIABLE = 6;
        const CLASS = 7;
        const INTERFACE = 8;
        const MODULE = 9;
        const PROPERTY = 10;
        const UNIT = 11;
        const VALUE = 12;
        const ENUM = 13;
        const KEYWORD = 14;
        const SNIPPET = 15;
        const COLOR = 16;
        const FILE = 17;
        const REFERENCE = 18;
        const FOLDER = 19;
        const ENUM_MEMBER = 20;
        const CONSTANT = 21;
        const STRUCT = 22;
        const EVENT = 23;
        const OPERATOR = 24;
        const TYPE_PARAMETER = 25;
    }
}

lsp_enum! {
    /// Extra annotations that tweak the rendering of a completion item.
    pub struct CompletionItemTag(u32) {
        const DEPRECATED = 1;
    }
}

lsp_enum! {
    /// Whether insert text is plain text or a snippet.
    pub struct InsertTextFormat(u32) {
        const PLAIN_TEXT = 1;
        const SNIPPET = 2;
    }
}

lsp_enum! {
    /// How whitespace and indentation is handled during completion insertion.
    pub struct InsertTextMode(u32) {
        const AS_IS = 1;
        const ADJUST_INDENTATION = 2;
    }
}

lsp_enum! {
    /// A document highlight kind.
    pub struct DocumentHighlightKind(u32) {
        const TEXT = 1;
        const READ = 2;
        const WRITE = 3;
    }
}

lsp_string_enum! {
    /// A set of predefined code action kinds.
    pub struct CodeActionKind {
        /// Empty kind.
        const EMPTY = "";
        const QUICKFIX = "quickfix";
        const REFACTOR = "refactor";
        const REFACTOR_EXTRACT = "refactor.extract";
        const REFACTOR_INLINE = "refactor.inline";
        const REFACTOR_MOVE = "refactor.move";
        const REFACTOR_REWRITE = "refactor.rewrite";
        const SOURCE = "source";
        const SOURCE_ORGANIZE_IMPORTS = "source.organizeImports";
        const SOURCE_FIX_ALL = "source.fixAll";
        /// Base kind for all code actions applying to an entire notebook.
        const NOTEBOOK = "notebook";
    }
}

lsp_enum! {
    /// Code action tags.
    pub struct CodeActionTag(u32) {
        /// The action was generated by a language model.
        const LLM_GENERATED = 1;
    }
}

lsp_string_enum! {
    /// Trace verbosity.
    pub struct TraceValue {
        const OFF = "off";
        const MESSAGES = "messages";
        const VERBOSE = "verbose";
    }
}

lsp_string_enum! {
    /// Content formats for markup.
    pub struct MarkupKind {
        const PLAIN_TEXT = "plaintext";
        const MARKDOWN = "markdown";
    }
}

lsp_string_enum! {
    /// Predefined language identifiers.
    pub struct LanguageKind {
        const ABAP = "abap";
        const WINDOWS_BAT = "bat";
        const BIB_TEX = "bibtex";
        const CLOJURE = "clojure";
        const COFFEESCRIPT = "coffeescript";
        const C = "c";
        const CPP = "cpp";
        const CSHARP = "csharp";
        const CSS = "css";
        const D = "d";
        const DELPHI = "pascal";
        const DIFF = "diff";
        const DART = "dart";
        const DOCKERFILE = "dockerfile";
        const ELIXIR = "elixir";
        const ERLANG = "erlang";
        const FSHARP = "fsharp";
        const GIT_COMMIT = "git-commit";
        const GIT_REBASE = "git-rebase";
        const GO = "go";
        const GROOVY = "groovy";
        const HANDLEBARS = "handlebars";
        const HASKELL = "haskell";
        const HTML = "html";
        const INI = "ini";
        const JAVA = "java";
        const JAVA_SCRIPT = "javascript";
        const JAVA_SCRIPT_REACT = "javascriptreact";
        const JSON = "json";
        const LATEX = "latex";
        const LESS = "less";
        const LUA = "lua";
        const MAKEFILE = "makefile";
        const MARKDOWN = "markdown";
        const OBJECTIVE_C = "objective-c";
        const OBJECTIVE_CPP = "objective-cpp";
        const PASCAL = "pascal";
        const PERL = "perl";
        const PERL6 = "perl6";
        const PHP = "php";
        const POWERSHELL = "powershell";
        const PUG = "jade";
        const PYTHON = "python";
        const R = "r";
        const RAZOR = "razor";
        const RUBY = "ruby";
        const RUST = "rust";
        const SCSS = "scss";
        const SASS = "sass";
        const SCALA = "scala";
        const SHADER_LAB = "shaderlab";
        const SHELL_SCRIPT = "shellscript";
        const SQL = "sql";
        const SWIFT = "swift";
        const TYPE_SCRIPT = "typescript";
        const TYPE_SCRIPT_REACT = "typescriptreact";
        const TEX = "tex";
        const VISUAL_BASIC = "vb";
        const XML = "xml";
        const XSL = "xsl";
        const YAML = "yaml";
    }
}

lsp_enum! {
    /// Describes how an inline completion request was triggered.
    pub struct InlineCompletionTriggerKind(u32) {
        /// Explicitly requested by the user or an extension.
        const INVOKED = 1;
        /// Requested automatically while the user types.
        const AUTOMATIC = 2;
    }
}

lsp_string_enum! {
    /// How character offsets within a line are counted.
    pub struct PositionEncodingKind {
        /// Offsets count UTF-8 code units.
        const UTF8 = "utf-8";
        /// Offsets count UTF-16 code units. Every client must support this.
        const UTF16 = "utf-16";
        /// Offsets count UTF-32 code units, i.e. Unicode code points.
        const UTF32 = "utf-32";
    }
}

lsp_enum! {
    /// The file event type.
    pub struct FileChangeType(u32) {
        const CREATED = 1;
        const CHANGED = 2;
        const DELETED = 3;
    }
}

lsp_enum! {
    /// Bit flags selecting the file events a watcher reports.
    pub struct WatchKind(u32) {
        const CREATE = 1;
        const CHANGE = 2;
        const DELETE = 4;
    }
}

lsp_enum! {
    /// The diagnostic's severity.
    pub struct DiagnosticSeverity(u32) {
        const ERROR = 1;
        const WARNING = 2;
        const INFORMATION = 3;
        const HINT = 4;
    }
}

lsp_enum! {
    /// The diagnostic tags.
    pub struct DiagnosticTag(u32) {
        /// Unused or unnecessary code, usually rendered faded out.
        const UNNECESSARY = 1;
        /// Deprecated or obsolete code, usually rendered struck through.
        const DEPRECATED = 2;
    }
}

lsp_enum! {
    /// How a completion was triggered.
    pub struct CompletionTriggerKind(u32) {
        const INVOKED = 1;
        const TRIGGER_CHARACTER = 2;
        const TRIGGER_FOR_INCOMPLETE_COMPLETIONS = 3;
    }
}

lsp_enum! {
    /// How item defaults combine with the values on a completion item.
    pub struct ApplyKind(u32) {
        /// The item's value replaces the default.
        const REPLACE = 1;
        /// The item's value is merged with the default.
        const MERGE = 2;
    }
}

lsp_enum! {
    /// How a signature help was triggered.
    pub struct SignatureHelpTriggerKind(u32) {
        const INVOKED = 1;
        const TRIGGER_CHARACTER = 2;
        const CONTENT_CHANGE = 3;
    }
}

lsp_enum! {
    /// The reason why code actions were requested.
    pub struct CodeActionTriggerKind(u32) {
        const INVOKED = 1;
        const AUTOMATIC = 2;
    }
}

lsp_string_enum! {
    /// Whether a file operation pattern matches files or folders.
    pub struct FileOperationPatternKind {
        const FILE = "file";
        const FOLDER = "folder";
    }
}

lsp_enum! {
    /// A notebook cell kind.
    pub struct NotebookCellKind(u32) {
        const MARKUP = 1;
        const CODE = 2;
    }
}

lsp_string_enum! {
    /// Resource operations a client can apply from a workspace edit.
    pub struct ResourceOperationKind {
        const CREATE = "create";
        const RENAME = "rename";
        const DELETE = "delete";
    }
}

lsp_string_enum! {
    /// How a client handles a failing workspace edit.
    pub struct FailureHandlingKind {
        const ABORT = "abort";
        const TRANSACTIONAL = "transactional";
        const TEXT_ONLY_TRANSACTIONAL = "textOnlyTransactional";
        const UNDO = "undo";
    }
}

lsp_enum! {
    /// Default rename range behaviour a client supports.
    pub struct PrepareSupportDefaultBehavior(u32) {
        /// Select the identifier according to the language's syntax rules.
        const IDENTIFIER = 1;
    }
}

lsp_string_enum! {
    /// Semantic token encoding formats.
    pub struct TokenFormat {
        const RELATIVE = "relative";
    }
}
