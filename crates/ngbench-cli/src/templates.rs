//! Starter files written by `ngbench init`.

pub const CONFIG_JSON: &str = r#"{
  "models": ["llama3", "codellama"],
  "test_suite_path": "test_suite.json"
}
"#;

pub const TEST_SUITE_JSON: &str = r#"[
  { "prompt": "Generate an Angular component that displays a list of users." },
  { "prompt": "Write an Angular service that fetches data over HTTP." },
  { "prompt": "Create an Angular module that declares a reusable button component." }
]
"#;
