//! Capability registry: the explicit name -> handler table.
//!
//! Built once at start-up by [`CapabilityRegistry::standard`] and read-only
//! afterwards. Every resource, tool and prompt the server exposes is listed
//! here; nothing registers itself.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use lingua_analysis::{analyze_complexity, calculate_ttr, count_words, find_longest_word};
use lingua_corpus::{CorpusError, ResourceProvider, LIST_URI, TEXT_URI_TEMPLATE};
use lingua_protocol::schema::{object_schema, string_field, validate_required_fields, SchemaProperty};
use lingua_types::{DiagnosticError, ErrorKind, LinguaError};

/// MIME type of every corpus resource.
pub const TEXT_MIME: &str = "text/plain";

/// Errors from registry lookups and invocations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No tool with this name is registered.
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },
    /// No prompt with this name is registered.
    #[error("unknown prompt: {name}")]
    UnknownPrompt { name: String },
    /// Arguments do not match the capability's declared inputs.
    #[error("invalid arguments for '{name}': {message}")]
    InvalidArguments { name: String, message: String },
    /// Resource read failed.
    #[error(transparent)]
    Resource(#[from] CorpusError),
}

impl From<RegistryError> for LinguaError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Resource(inner) => inner.into(),
            RegistryError::UnknownTool { .. } | RegistryError::UnknownPrompt { .. } => {
                LinguaError::new(ErrorKind::NotFound, e.to_string())
            }
            RegistryError::InvalidArguments { .. } => {
                LinguaError::new(ErrorKind::InvalidInput, e.to_string())
            }
        }
    }
}

impl DiagnosticError for RegistryError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownTool { .. } => Some(format!(
                "Registered tools: {}.",
                TOOL_NAMES.join(", ")
            )),
            Self::UnknownPrompt { .. } => Some("The only prompt is analyze_complexity.".into()),
            Self::InvalidArguments { .. } => None,
            Self::Resource(e) => e.hint(),
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Resource(e) => e.fix(),
            Self::UnknownTool { .. } | Self::UnknownPrompt { .. } => {
                Some("Run `lingua capabilities` to list every registered name.".into())
            }
            Self::InvalidArguments { .. } => None,
        }
    }
}

/// Value produced by a tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Ratio or other real number.
    Float(f64),
    /// Count.
    Integer(u64),
    /// Text fragment.
    Text(String),
}

impl ToolOutput {
    /// Text rendering sent to clients.
    ///
    /// Floats always carry a decimal point (`0.0`, `0.8333333333333334`).
    pub fn render(&self) -> String {
        match self {
            Self::Float(v) => format!("{v:?}"),
            Self::Integer(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Tool implementation: takes the `text` argument.
pub type ToolHandler = fn(&str) -> ToolOutput;

/// Prompt implementation: takes argument values in declaration order.
pub type PromptRenderer = fn(&[&str]) -> String;

/// A registered tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolEntry {
    /// Tool name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Declared inputs.
    pub arguments: &'static [SchemaProperty],
    /// Implementation.
    pub handler: ToolHandler,
}

impl ToolEntry {
    /// JSON Schema of the tool's inputs.
    pub fn input_schema(&self) -> Value {
        object_schema(self.arguments)
    }
}

/// A declared prompt argument.
#[derive(Debug, Clone, Copy)]
pub struct PromptArgumentSpec {
    /// Argument name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether the argument must be supplied.
    pub required: bool,
}

/// A registered prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptEntry {
    /// Prompt name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Declared arguments.
    pub arguments: &'static [PromptArgumentSpec],
    /// Implementation.
    pub render: PromptRenderer,
}

/// A fixed-URI resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceEntry {
    /// Resource URI.
    pub uri: &'static str,
    /// Resource name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// A parameterized resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTemplateEntry {
    /// URI template.
    pub uri_template: &'static str,
    /// Template name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Kind of a registered capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Resource,
    Tool,
    Prompt,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resource => "resource",
            Self::Tool => "tool",
            Self::Prompt => "prompt",
        })
    }
}

const TEXT_ARGUMENT: &[SchemaProperty] = &[SchemaProperty {
    name: "text",
    json_type: "string",
    description: "Text to analyze",
    required: true,
}];

const TOOL_NAMES: &[&str] = &["calculate_ttr", "count_words", "find_longest_word"];

const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        name: "calculate_ttr",
        description: "Calculate Type-Token Ratio (TTR) of a text. \
                      TTR = (Unique Words / Total Words). \
                      Higher values indicate greater lexical diversity.",
        arguments: TEXT_ARGUMENT,
        handler: ttr_tool,
    },
    ToolEntry {
        name: "count_words",
        description: "Count total words in text.",
        arguments: TEXT_ARGUMENT,
        handler: count_words_tool,
    },
    ToolEntry {
        name: "find_longest_word",
        description: "Find the longest word in the text.",
        arguments: TEXT_ARGUMENT,
        handler: longest_word_tool,
    },
];

const PROMPTS: &[PromptEntry] = &[PromptEntry {
    name: "analyze_complexity",
    description: "Generate a prompt for analyzing text complexity.",
    arguments: &[PromptArgumentSpec {
        name: "text_id",
        description: "Identifier of the corpus text to analyze",
        required: true,
    }],
    render: complexity_prompt,
}];

const RESOURCES: &[ResourceEntry] = &[ResourceEntry {
    uri: LIST_URI,
    name: "list_texts",
    description: "List all available text IDs in the corpus.",
}];

const RESOURCE_TEMPLATES: &[ResourceTemplateEntry] = &[ResourceTemplateEntry {
    uri_template: TEXT_URI_TEMPLATE,
    name: "get_text",
    description: "Retrieve text content by ID.",
}];

fn ttr_tool(text: &str) -> ToolOutput {
    ToolOutput::Float(calculate_ttr(text))
}

fn count_words_tool(text: &str) -> ToolOutput {
    ToolOutput::Integer(count_words(text) as u64)
}

fn longest_word_tool(text: &str) -> ToolOutput {
    ToolOutput::Text(find_longest_word(text).to_string())
}

fn complexity_prompt(args: &[&str]) -> String {
    analyze_complexity(args.first().copied().unwrap_or_default())
}

/// Read-only table of every capability the server exposes.
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    tools: &'static [ToolEntry],
    prompts: &'static [PromptEntry],
    resources: &'static [ResourceEntry],
    resource_templates: &'static [ResourceTemplateEntry],
    provider: ResourceProvider,
}

impl CapabilityRegistry {
    /// The standard table: corpus resources, lexical tools, analysis prompt.
    pub fn standard(provider: ResourceProvider) -> Self {
        Self {
            tools: TOOLS,
            prompts: PROMPTS,
            resources: RESOURCES,
            resource_templates: RESOURCE_TEMPLATES,
            provider,
        }
    }

    /// Registered tools, in listing order.
    pub fn tools(&self) -> &[ToolEntry] {
        self.tools
    }

    /// Registered prompts, in listing order.
    pub fn prompts(&self) -> &[PromptEntry] {
        self.prompts
    }

    /// Fixed-URI resources.
    pub fn resources(&self) -> &[ResourceEntry] {
        self.resources
    }

    /// Parameterized resources.
    pub fn resource_templates(&self) -> &[ResourceTemplateEntry] {
        self.resource_templates
    }

    /// Provider backing the resources.
    pub fn provider(&self) -> &ResourceProvider {
        &self.provider
    }

    /// Looks up a tool by name.
    pub fn tool(&self, name: &str) -> Result<&ToolEntry, RegistryError> {
        self.tools
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| RegistryError::UnknownTool {
                name: name.to_string(),
            })
    }

    /// Looks up a prompt by name.
    pub fn prompt(&self, name: &str) -> Result<&PromptEntry, RegistryError> {
        self.prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RegistryError::UnknownPrompt {
                name: name.to_string(),
            })
    }

    /// Validates `arguments` against the tool's schema and runs it.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownTool`] or [`RegistryError::InvalidArguments`].
    pub fn call_tool(&self, name: &str, arguments: &Value) -> Result<ToolOutput, RegistryError> {
        let tool = self.tool(name)?;
        let invalid = |message: String| RegistryError::InvalidArguments {
            name: name.to_string(),
            message,
        };
        validate_required_fields(&tool.input_schema(), arguments)
            .map_err(|e| invalid(e.to_string()))?;
        let text = string_field(arguments, "text").map_err(|e| invalid(e.to_string()))?;
        Ok((tool.handler)(text))
    }

    /// Renders a prompt from named string arguments.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownPrompt`], or
    /// [`RegistryError::InvalidArguments`] if a required argument is absent.
    pub fn get_prompt(
        &self,
        name: &str,
        arguments: &HashMap<String, String>,
    ) -> Result<String, RegistryError> {
        let prompt = self.prompt(name)?;
        let mut values = Vec::with_capacity(prompt.arguments.len());
        for arg in prompt.arguments {
            match arguments.get(arg.name) {
                Some(v) => values.push(v.as_str()),
                None if arg.required => {
                    return Err(RegistryError::InvalidArguments {
                        name: name.to_string(),
                        message: format!("missing required argument: {}", arg.name),
                    })
                }
                None => values.push(""),
            }
        }
        Ok((prompt.render)(&values))
    }

    /// Reads a `corpus://` resource.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Resource`] wrapping the provider's error.
    pub fn read_resource(&self, uri: &str) -> Result<String, RegistryError> {
        Ok(self.provider.resolve_uri(uri)?)
    }

    /// Every capability as `(kind, name, description)`, resources first.
    pub fn capabilities(&self) -> Vec<(CapabilityKind, &'static str, &'static str)> {
        let resources = self
            .resources
            .iter()
            .map(|r| (CapabilityKind::Resource, r.uri, r.description));
        let templates = self
            .resource_templates
            .iter()
            .map(|t| (CapabilityKind::Resource, t.uri_template, t.description));
        let tools = self
            .tools
            .iter()
            .map(|t| (CapabilityKind::Tool, t.name, t.description));
        let prompts = self
            .prompts
            .iter()
            .map(|p| (CapabilityKind::Prompt, p.name, p.description));
        resources.chain(templates).chain(tools).chain(prompts).collect()
    }
}
