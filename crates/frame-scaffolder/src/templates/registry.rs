//! Built-in template and validator registry

use colored::{ColoredString, Colorize};
use std::fmt;
use std::str::FromStr;

/// Log level written to `.env` when a template does not pin its own
pub const DEFAULT_LOG_LEVEL: u8 = 2;

/// Dependencies every generated project installs
pub const BASE_DEPENDENCIES: &[&str] = &[
    "@dotenvx/dotenvx",
    "@novice1/api-doc-generator",
    "@novice1/frame",
    "@novice1/logger",
    "@novice1/routing",
    "tslib",
];

/// Dev dependencies every generated project installs
pub const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "@eslint/eslintrc",
    "@eslint/js",
    "@stylistic/eslint-plugin-js",
    "@types/cors",
    "@types/express",
    "@types/node",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "eslint@9",
    "globals",
    "nodemon",
    "ts-node",
    "typescript",
    "typescript-eslint",
];

/// Dev dependencies for templates that ship an end-to-end test runner
pub const E2E_DEV_DEPENDENCIES: &[&str] = &[
    "@types/chai",
    "@types/mocha",
    "@types/supertest",
    "@types/swagger-ui-express",
    "chai",
    "eslint-plugin-mocha",
    "kaukau",
    "supertest",
];

/// Display colour used when listing templates and validators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Yellow,
    Green,
    Cyan,
    Blue,
    Red,
}

impl Tint {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Tint::Yellow => text.yellow(),
            Tint::Green => text.green(),
            Tint::Cyan => text.cyan(),
            Tint::Blue => text.blue(),
            Tint::Red => text.red(),
        }
    }
}

/// Identifier of a built-in template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Basic,
    Curved,
    Wide,
    Advanced,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Basic,
        TemplateId::Curved,
        TemplateId::Wide,
        TemplateId::Advanced,
    ];

    /// Directory name under the templates root, also the `--template` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Basic => "basic",
            TemplateId::Curved => "curved",
            TemplateId::Wide => "wide",
            TemplateId::Advanced => "advanced",
        }
    }

    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        match self {
            TemplateId::Basic => &TEMPLATES[0],
            TemplateId::Curved => &TEMPLATES[1],
            TemplateId::Wide => &TEMPLATES[2],
            TemplateId::Advanced => &TEMPLATES[3],
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// A template name that is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" isn't a valid template")]
pub struct UnknownTemplate(pub String);

/// Identifier of a schema validator sub-variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorId {
    Ajv,
    Joi,
    TypeBox,
    Zod,
}

impl ValidatorId {
    /// Directory name of the overlay under its template
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorId::Ajv => "ajv",
            ValidatorId::Joi => "joi",
            ValidatorId::TypeBox => "typebox",
            ValidatorId::Zod => "zod",
        }
    }

    pub fn descriptor(&self) -> &'static ValidatorDescriptor {
        match self {
            ValidatorId::Ajv => &VALIDATORS[0],
            ValidatorId::Joi => &VALIDATORS[1],
            ValidatorId::TypeBox => &VALIDATORS[2],
            ValidatorId::Zod => &VALIDATORS[3],
        }
    }

    /// Packages pulled in by the validator. Projects without a validator get
    /// the Joi set, which the plain templates are written against.
    pub fn dependencies(validator: Option<ValidatorId>) -> &'static [&'static str] {
        validator.unwrap_or(ValidatorId::Joi).descriptor().dependencies
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a template
#[derive(Debug)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub display_name: &'static str,
    pub tint: Tint,
    /// Pinned `LOG_LEVEL`, if the template wants something other than the default
    pub log_level: Option<u8>,
    /// Whether the template ships unit and end-to-end test runners
    pub has_e2e: bool,
    /// Empty for single-layout templates; otherwise a `commons` tree plus one overlay per entry
    pub validators: &'static [ValidatorId],
}

impl TemplateDescriptor {
    pub fn log_level(&self) -> u8 {
        self.log_level.unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn has_validators(&self) -> bool {
        !self.validators.is_empty()
    }

    /// Label shown in selection lists
    pub fn label(&self) -> ColoredString {
        self.tint.paint(self.display_name)
    }
}

/// Static description of a validator sub-variant
#[derive(Debug)]
pub struct ValidatorDescriptor {
    pub id: ValidatorId,
    pub display_name: &'static str,
    pub tint: Tint,
    pub dependencies: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    /// Extra `package.json` scripts, merged after the fixed entries
    pub scripts: &'static [(&'static str, &'static str)],
}

impl ValidatorDescriptor {
    pub fn label(&self) -> ColoredString {
        self.tint.paint(self.display_name)
    }
}

const ADVANCED_VALIDATORS: &[ValidatorId] = &[
    ValidatorId::Ajv,
    ValidatorId::Joi,
    ValidatorId::TypeBox,
    ValidatorId::Zod,
];

/// Every template, in the order they are offered
pub static TEMPLATES: [TemplateDescriptor; 4] = [
    TemplateDescriptor {
        id: TemplateId::Basic,
        display_name: "Basic",
        tint: Tint::Yellow,
        log_level: None,
        has_e2e: false,
        validators: &[],
    },
    TemplateDescriptor {
        id: TemplateId::Curved,
        display_name: "Curved",
        tint: Tint::Green,
        log_level: None,
        has_e2e: false,
        validators: &[],
    },
    TemplateDescriptor {
        id: TemplateId::Wide,
        display_name: "Wide",
        tint: Tint::Cyan,
        log_level: None,
        has_e2e: true,
        validators: &[],
    },
    TemplateDescriptor {
        id: TemplateId::Advanced,
        display_name: "Advanced",
        tint: Tint::Blue,
        log_level: Some(4),
        has_e2e: true,
        validators: ADVANCED_VALIDATORS,
    },
];

static VALIDATORS: [ValidatorDescriptor; 4] = [
    ValidatorDescriptor {
        id: ValidatorId::Ajv,
        display_name: "Ajv",
        tint: Tint::Green,
        dependencies: &["ajv", "@novice1/api-doc-json-helper", "@novice1/validator-json"],
        dev_dependencies: &[],
        scripts: &[],
    },
    ValidatorDescriptor {
        id: ValidatorId::Joi,
        display_name: "Joi",
        tint: Tint::Red,
        dependencies: &["joi", "@novice1/validator-joi"],
        dev_dependencies: &[],
        scripts: &[],
    },
    ValidatorDescriptor {
        id: ValidatorId::TypeBox,
        display_name: "TypeBox",
        tint: Tint::Yellow,
        dependencies: &[
            "@sinclair/typebox",
            "@novice1/api-doc-json-helper",
            "@novice1/validator-typebox",
        ],
        dev_dependencies: &[],
        scripts: &[],
    },
    ValidatorDescriptor {
        id: ValidatorId::Zod,
        display_name: "Zod",
        tint: Tint::Blue,
        dependencies: &["zod@next", "@novice1/api-doc-zod-helper", "@novice1/validator-zod"],
        dev_dependencies: &[],
        scripts: &[],
    },
];
