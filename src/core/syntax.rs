//! Purpose: Hold the fixed catalog of syntax-highlighting identifiers.
//! Exports: `FORMATS`, `is_known_format`.
//! Role: Pre-flight membership check for the paste `format` parameter.
//! Invariants: Identifiers are the service's exact lowercase tokens.
//! Invariants: Matching is case-sensitive; no aliases are accepted.

pub const FORMATS: &[&str] = &[
    "4cs",
    "6502acme",
    "6502kickass",
    "6502tasm",
    "abap",
    "actionscript",
    "actionscript3",
    "ada",
    "aimms",
    "algol68",
    "apache",
    "applescript",
    "apt_sources",
    "arduino",
    "arm",
    "asm",
    "asp",
    "asymptote",
    "autoconf",
    "autohotkey",
    "autoit",
    "avisynth",
    "awk",
    "bascomavr",
    "bash",
    "basic4gl",
    "b3d",
    "bf",
    "bibtex",
    "blitzbasic",
    "bmx",
    "bnf",
    "boo",
    "c",
    "csharp",
    "c_winapi",
    "cpp",
    "cpp-winapi",
    "cpp-qt",
    "c_loadrunner",
    "caddcl",
    "cadlisp",
    "ceylon",
    "cfdg",
    "c_mac",
    "chaiscript",
    "chapel",
    "cil",
    "clojure",
    "klonec",
    "klonecpp",
    "cmake",
    "cobol",
    "coffeescript",
    "cfm",
    "css",
    "cuesheet",
    "d",
    "dart",
    "dcl",
    "dcpu16",
    "dcs",
    "delphi",
    "oxygene",
    "diff",
    "div",
    "dos",
    "dot",
    "e",
    "ezt",
    "ecmascript",
    "eiffel",
    "email",
    "epc",
    "erlang",
    "euphoria",
    "fsharp",
    "falcon",
    "filemaker",
    "fo",
    "f1",
    "fortran",
    "freebasic",
    "freeswitch",
    "gambas",
    "gml",
    "gdb",
    "gdscript",
    "genero",
    "genie",
    "gettext",
    "go",
    "godot-glsl",
    "groovy",
    "gwbasic",
    "haskell",
    "haxe",
    "hicest",
    "hq9plus",
    "html4strict",
    "html5",
    "icon",
    "idl",
    "ini",
    "inno",
    "intercal",
    "io",
    "ispfpanel",
    "j",
    "java",
    "java5",
    "javascript",
    "jcl",
    "jquery",
    "json",
    "julia",
    "kixtart",
    "kotlin",
    "ksp",
    "latex",
    "ldif",
    "lb",
    "lsl2",
    "lisp",
    "llvm",
    "locobasic",
    "logtalk",
    "lolcode",
    "lotusformulas",
    "lotusscript",
    "lscript",
    "lua",
    "m68k",
    "magiksf",
    "make",
    "mapbasic",
    "markdown",
    "matlab",
    "mercury",
    "metapost",
    "mirc",
    "mmix",
    "mk-61",
    "modula2",
    "modula3",
    "mpasm",
    "mxml",
    "mysql",
    "nagios",
    "netrexx",
    "newlisp",
    "nginx",
    "nim",
    "nsis",
    "oberon2",
    "objeck",
    "objc",
    "ocaml",
    "ocaml-brief",
    "octave",
    "pf",
    "glsl",
    "oorexx",
    "oobas",
    "oracle8",
    "oracle11",
    "oz",
    "parasail",
    "parigp",
    "pascal",
    "pawn",
    "pcre",
    "per",
    "perl",
    "perl6",
    "phix",
    "php",
    "php-brief",
    "pic16",
    "pike",
    "pixelbender",
    "pli",
    "plsql",
    "postgresql",
    "postscript",
    "povray",
    "powerbuilder",
    "powershell",
    "proftpd",
    "progress",
    "prolog",
    "properties",
    "providex",
    "puppet",
    "purebasic",
    "pycon",
    "python",
    "pys60",
    "q",
    "qbasic",
    "qml",
    "rsplus",
    "racket",
    "rails",
    "rbs",
    "rebol",
    "reg",
    "rexx",
    "robots",
    "roff",
    "rpmspec",
    "ruby",
    "gnuplot",
    "rust",
    "sas",
    "scala",
    "scheme",
    "scilab",
    "scl",
    "sdlbasic",
    "smalltalk",
    "smarty",
    "spark",
    "sparql",
    "sqf",
    "sql",
    "sshconfig",
    "standardml",
    "stonescript",
    "sclang",
    "swift",
    "systemverilog",
    "tsql",
    "tcl",
    "teraterm",
    "texgraph",
    "text",
    "thinbasic",
    "typescript",
    "typoscript",
    "unicon",
    "uscript",
    "upc",
    "urbi",
    "vala",
    "vbnet",
    "vbscript",
    "vedit",
    "verilog",
    "vhdl",
    "vim",
    "visualprolog",
    "visualfoxpro",
    "whitespace",
    "whois",
    "winbatch",
    "xbasic",
    "xml",
    "xojo",
    "xorg_conf",
    "xpp",
    "yaml",
    "yara",
    "z80",
    "zxbasic",
];

pub fn is_known_format(format: &str) -> bool {
    FORMATS.iter().any(|known| *known == format)
}

#[cfg(test)]
mod tests {
    use super::{FORMATS, is_known_format};

    #[test]
    fn catalog_contains_common_identifiers() {
        assert!(is_known_format("python"));
        assert!(is_known_format("6502acme"));
        assert!(is_known_format("rust"));
        assert!(is_known_format("text"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_known_format("Python"));
        assert!(!is_known_format("PYTHON"));
    }

    #[test]
    fn near_miss_identifiers_are_rejected() {
        assert!(!is_known_format("python3"));
        assert!(!is_known_format("rs"));
        assert!(!is_known_format(""));
    }

    #[test]
    fn catalog_has_no_duplicates() {
        for (index, format) in FORMATS.iter().enumerate() {
            assert!(
                !FORMATS[index + 1..].contains(format),
                "duplicate format {format:?}"
            );
        }
    }
}
