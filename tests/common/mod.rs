#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file with the given extension.
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_table(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("roadmap_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_table(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_table(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_table(content, "toml")
    }
}

/// The demo table: the address, yes/no and "w" routes.
pub const DEMO_TABLE: &str = r#"
default_reply: "Sorry, regex not found"
routes:
  - name: com_address
    pattern: '^\w+@\w+\.com$'
    reply: "Commercial address: {0}"
  - name: org_address
    pattern: '^(\w+)@\w+\.org$'
    pass_primary: false
    reply: "Organization address: {0}"
  - name: yes
    pattern: '^[yY]'
    pass_primary: false
    reply: "yes"
  - name: no
    pattern: '^[nN]'
    reply: 'You said no :( ("{0}" to be exact)'
  - name: ends_with_w
    pattern: 'end(.*?)[wW]+(?P<after_w>.*)'
    reply: "{0} {1} {2} / {after_w}"
"#;
