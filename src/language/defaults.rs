use super::{CommentSyntax, Language};

fn c_style() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

fn hash_style() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![])
}

fn markup_style() -> CommentSyntax {
    CommentSyntax::new(vec![], vec![("<!--", "-->")])
}

/// The language table used when no override file is given.
#[allow(clippy::too_many_lines)]
pub(super) fn builtin_languages() -> Vec<Language> {
    vec![
        Language::new("ActionScript", vec![".as"], c_style()),
        Language::new(
            "Assembly",
            vec![".asm", ".s"],
            CommentSyntax::new(vec![";"], vec![]),
        ),
        Language::new(
            "Batch",
            vec![".bat", ".cmd"],
            CommentSyntax::new(vec!["REM", "::"], vec![]),
        ),
        Language::new("C", vec![".c", ".h"], c_style()),
        Language::new("C#", vec![".cs"], c_style()),
        Language::new(
            "C++",
            vec![".cpp", ".cc", ".cxx", ".c++", ".hpp", ".hh", ".hxx"],
            c_style(),
        ),
        Language::new(
            "Clojure",
            vec![".clj", ".cljs", ".cljc", ".edn"],
            CommentSyntax::new(vec![";"], vec![]),
        ),
        Language::new("CMake", vec![".cmake"], hash_style()),
        Language::new(
            "CSS",
            vec![".css"],
            CommentSyntax::new(vec![], vec![("/*", "*/")]),
        ),
        Language::new("Dart", vec![".dart"], c_style()),
        Language::new("Dockerfile", vec![".dockerfile"], hash_style())
            .with_filenames(vec!["Dockerfile", "dockerfile"]),
        Language::new(
            "Elixir",
            vec![".ex", ".exs"],
            CommentSyntax::new(vec!["#"], vec![("@doc \"\"\"", "\"\"\"")]),
        ),
        Language::new(
            "Erlang",
            vec![".erl", ".hrl"],
            CommentSyntax::new(vec!["%"], vec![]),
        ),
        Language::new(
            "F#",
            vec![".fs", ".fsi", ".fsx"],
            CommentSyntax::new(vec!["//"], vec![("(*", "*)")]),
        ),
        Language::new("Go", vec![".go"], c_style()),
        Language::new("Gradle", vec![".gradle"], c_style()),
        Language::new("Groovy", vec![".groovy"], c_style()),
        Language::new(
            "Haskell",
            vec![".hs", ".lhs"],
            CommentSyntax::new(vec!["--"], vec![("{-", "-}")]),
        ),
        Language::new("HTML", vec![".html", ".htm", ".xhtml"], markup_style()),
        Language::new("Java", vec![".java"], c_style()),
        Language::new("JavaScript", vec![".js", ".mjs", ".cjs", ".jsx"], c_style()),
        Language::new("JSON", vec![".json"], CommentSyntax::default()),
        Language::new("Kotlin", vec![".kt", ".kts"], c_style()),
        Language::new("Less", vec![".less"], c_style()),
        Language::new(
            "Lua",
            vec![".lua"],
            CommentSyntax::new(vec!["--"], vec![("--[[", "]]")]),
        ),
        Language::new("Makefile", vec![".mk", ".mak"], hash_style())
            .with_filenames(vec!["Makefile", "makefile", "GNUmakefile"]),
        Language::new("Markdown", vec![".md", ".markdown"], markup_style()),
        Language::new("Objective-C", vec![".m", ".mm"], c_style()),
        Language::new(
            "Pascal",
            vec![".pas", ".pp"],
            CommentSyntax::new(vec!["//"], vec![("{", "}"), ("(*", "*)")]),
        ),
        Language::new(
            "Perl",
            vec![".pl", ".pm"],
            CommentSyntax::new(vec!["#"], vec![("=pod", "=cut")]),
        ),
        Language::new(
            "PHP",
            vec![".php", ".phtml"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        ),
        Language::new(
            "PowerShell",
            vec![".ps1", ".psm1", ".psd1"],
            CommentSyntax::new(vec!["#"], vec![("<#", "#>")]),
        ),
        Language::new(
            "Python",
            vec![".py", ".pyi", ".pyw"],
            CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\""), ("'''", "'''")]),
        ),
        Language::new("R", vec![".r"], hash_style()),
        Language::new(
            "Ruby",
            vec![".rb", ".rake", ".gemspec"],
            CommentSyntax::new(vec!["#"], vec![("=begin", "=end")]),
        )
        .with_filenames(vec!["Rakefile", "Gemfile"]),
        Language::new("Rust", vec![".rs"], c_style()),
        Language::new("Sass", vec![".scss", ".sass"], c_style()),
        Language::new("Scala", vec![".scala", ".sc"], c_style()),
        Language::new("Shell", vec![".sh", ".bash", ".zsh", ".ksh"], hash_style()),
        Language::new(
            "SQL",
            vec![".sql"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")]),
        ),
        Language::new("Swift", vec![".swift"], c_style()),
        Language::new(
            "Terraform",
            vec![".tf", ".tfvars"],
            CommentSyntax::new(vec!["#", "//"], vec![("/*", "*/")]),
        ),
        Language::new("TOML", vec![".toml"], hash_style()),
        Language::new("TypeScript", vec![".ts", ".mts", ".cts", ".tsx"], c_style()),
        Language::new(
            "Visual Basic",
            vec![".vb", ".bas", ".vbs"],
            CommentSyntax::new(vec!["'"], vec![]),
        ),
        Language::new(
            "Vue",
            vec![".vue"],
            CommentSyntax::new(vec!["//"], vec![("<!--", "-->")]),
        ),
        Language::new(
            "XML",
            vec![".xml", ".xsd", ".xsl", ".csproj"],
            markup_style(),
        ),
        Language::new("YAML", vec![".yaml", ".yml"], hash_style()),
    ]
}
