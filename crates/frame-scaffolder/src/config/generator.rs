//! Generated project files: package.json, .env, .gitignore and nodemon.json

use crate::error::{Result, ScaffoldError};
use crate::request::InvocationRequest;
use crate::templates::registry::TemplateId;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Initial version of every generated package
pub const INITIAL_VERSION: &str = "1.0.0";

/// License used when none was given
pub const NO_LICENSE: &str = "UNLICENSED";

/// Port written to `.env`
pub const DEFAULT_PORT: u16 = 8080;

pub const GITIGNORE: &str = include_str!("gitignore.txt");

const UNIT_TEST_SCRIPT: &str = "kaukau -r ts-node/register -f src --ext .spec.ts";
const E2E_TEST_SCRIPT: &str = "kaukau --require ts-node/register --config test/kaukau-e2e.mjs";

/// A file to write at the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

#[derive(Debug, Serialize)]
struct PackageJson<'a> {
    name: &'a str,
    version: &'static str,
    description: &'a str,
    author: &'a str,
    license: &'a str,
    private: bool,
    scripts: Map<String, Value>,
    dependencies: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct NodemonConfig {
    watch: [&'static str; 3],
    ext: &'static str,
    ignore: [&'static str; 1],
    exec: &'static str,
}

const NODEMON: NodemonConfig = NodemonConfig {
    watch: ["src", ".env", ".env.development.local"],
    ext: "ts,json",
    ignore: ["src/**/*.spec.ts"],
    exec: "dotenvx run -- ts-node ./src/index.ts",
};

fn to_pretty_json<T: Serialize>(file: &'static str, value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|source| ScaffoldError::Serialize { file, source })?;
    Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
}

/// `package.json` for the project. Dependencies stay empty; the installer adds them.
pub fn package_json(request: &InvocationRequest) -> Result<String> {
    let mut scripts = Map::new();
    for (name, command) in [
        ("build", "tsc"),
        ("dev", "nodemon"),
        ("lint", "eslint ."),
        ("start", "node dist/index.js"),
        ("test", "echo \"Error: no test specified\" && exit 1"),
    ] {
        scripts.insert(name.to_string(), Value::from(command));
    }

    if request.template_descriptor().has_e2e {
        scripts.insert("test".to_string(), Value::from(UNIT_TEST_SCRIPT));
        scripts.insert("test:e2e".to_string(), Value::from(E2E_TEST_SCRIPT));
    }

    if let Some(validator) = request.validator {
        for (name, command) in validator.descriptor().scripts {
            scripts.insert(name.to_string(), Value::from(*command));
        }
    }

    let manifest = PackageJson {
        name: &request.package_name,
        version: INITIAL_VERSION,
        description: request.description.as_deref().unwrap_or_default(),
        author: request.author.as_deref().unwrap_or_default(),
        license: request.license.as_deref().unwrap_or(NO_LICENSE),
        private: true,
        scripts,
        dependencies: Map::new(),
    };

    to_pretty_json("package.json", &manifest)
}

/// `.env` contents. The basic template has no logger, so it only gets a port.
pub fn dotenv(request: &InvocationRequest) -> String {
    let mut content = format!("PORT={}\n", DEFAULT_PORT);
    if request.template != TemplateId::Basic {
        content.push_str(&format!("LOG_LEVEL={}\n", request.log_level));
        content.push_str("LOG_DEBUG=\n");
    }
    content
}

/// `nodemon.json`, identical for every template
pub fn nodemon_json() -> Result<String> {
    to_pretty_json("nodemon.json", &NODEMON)
}

/// Every generated file for the request, in write order
pub fn generate(request: &InvocationRequest) -> Result<Vec<GeneratedFile>> {
    Ok(vec![
        GeneratedFile {
            name: "package.json",
            contents: package_json(request)?,
        },
        GeneratedFile {
            name: ".env",
            contents: dotenv(request),
        },
        GeneratedFile {
            name: ".gitignore",
            contents: GITIGNORE.to_string(),
        },
        GeneratedFile {
            name: "nodemon.json",
            contents: nodemon_json()?,
        },
    ])
}

/// Write generated files into `root`, replacing whatever is there
pub fn write_files(root: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = root.join(file.name);
        debug!(path = %path.display(), "writing generated file");
        fs::write(&path, &file.contents).map_err(|source| ScaffoldError::Write {
            path: path.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry::ValidatorId;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request(template: TemplateId, validator: Option<ValidatorId>) -> InvocationRequest {
        InvocationRequest {
            target_dir: "my-app".to_string(),
            root: PathBuf::from("/work/my-app"),
            package_name: "my-app".to_string(),
            author: None,
            description: None,
            license: None,
            template,
            validator,
            log_level: template.descriptor().log_level(),
            conflict_policy: None,
        }
    }

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_basic_dotenv_has_only_port() {
        assert_eq!(dotenv(&request(TemplateId::Basic, None)), "PORT=8080\n");
    }

    #[test]
    fn test_advanced_dotenv_has_log_entries() {
        assert_eq!(
            dotenv(&request(TemplateId::Advanced, Some(ValidatorId::Joi))),
            "PORT=8080\nLOG_LEVEL=4\nLOG_DEBUG=\n"
        );
        assert_eq!(
            dotenv(&request(TemplateId::Curved, None)),
            "PORT=8080\nLOG_LEVEL=2\nLOG_DEBUG=\n"
        );
    }

    #[test]
    fn test_package_json_defaults() {
        let json = parse(&package_json(&request(TemplateId::Basic, None)).unwrap());

        assert_eq!(json["name"], "my-app");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["description"], "");
        assert_eq!(json["author"], "");
        assert_eq!(json["license"], "UNLICENSED");
        assert_eq!(json["private"], true);
        assert_eq!(json["dependencies"], serde_json::json!({}));
        assert_eq!(
            json["scripts"]["test"],
            "echo \"Error: no test specified\" && exit 1"
        );
        assert!(json["scripts"].get("test:e2e").is_none());
    }

    #[test]
    fn test_package_json_key_order_and_indent() {
        let text = package_json(&request(TemplateId::Basic, None)).unwrap();
        let keys: Vec<usize> = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"author\"",
            "\"license\"",
            "\"private\"",
            "\"scripts\"",
            "\"dependencies\"",
        ]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(text.starts_with("{\n    \"name\": \"my-app\","));
    }

    #[test]
    fn test_package_json_uses_metadata() {
        let mut req = request(TemplateId::Curved, None);
        req.author = Some("Jane".to_string());
        req.description = Some("An API".to_string());
        req.license = Some("MIT".to_string());
        let json = parse(&package_json(&req).unwrap());

        assert_eq!(json["author"], "Jane");
        assert_eq!(json["description"], "An API");
        assert_eq!(json["license"], "MIT");
    }

    #[test]
    fn test_e2e_templates_get_test_scripts() {
        let json = parse(&package_json(&request(TemplateId::Advanced, Some(ValidatorId::Zod))).unwrap());
        assert_eq!(json["scripts"]["test"], UNIT_TEST_SCRIPT);
        assert_eq!(json["scripts"]["test:e2e"], E2E_TEST_SCRIPT);

        let json = parse(&package_json(&request(TemplateId::Wide, None)).unwrap());
        assert_eq!(json["scripts"]["test:e2e"], E2E_TEST_SCRIPT);
    }

    #[test]
    fn test_nodemon_shape() {
        let json = parse(&nodemon_json().unwrap());
        assert_eq!(
            json,
            serde_json::json!({
                "watch": ["src", ".env", ".env.development.local"],
                "ext": "ts,json",
                "ignore": ["src/**/*.spec.ts"],
                "exec": "dotenvx run -- ts-node ./src/index.ts"
            })
        );
    }

    #[test]
    fn test_write_files_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "OLD=1\n").unwrap();

        let files = generate(&request(TemplateId::Basic, None)).unwrap();
        write_files(dir.path(), &files).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(".env")).unwrap(), "PORT=8080\n");
        assert_eq!(
            fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
            GITIGNORE
        );
        assert!(dir.path().join("package.json").exists());
        assert!(dir.path().join("nodemon.json").exists());
    }
}
