//! Tool registry: listing and invocation

use coinex_types::ResponseEnvelope;
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, error, instrument};

use crate::args::ToolArgs;
use crate::context::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::schema::{ToolSpec, ToolTag};
use crate::tools::Tool;

/// Which tools are exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Only `public` tools; auth tools are hidden
    PublicOnly,
    /// Both `public` and `auth` tools
    #[default]
    All,
}

impl ToolMode {
    /// Check whether a tag is visible in this mode
    pub fn exposes(&self, tag: ToolTag) -> bool {
        match self {
            Self::PublicOnly => tag == ToolTag::Public,
            Self::All => true,
        }
    }
}

/// Registry of declared tools, filtered by [`ToolMode`]
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    mode: ToolMode,
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Registry exposing the tools allowed by `mode`
    pub fn new(mode: ToolMode) -> Self {
        let specs = Tool::ALL
            .iter()
            .filter(|tool| mode.exposes(tool.tag()))
            .map(Tool::spec)
            .collect();
        Self { mode, specs }
    }

    /// Exposure mode this registry was built with
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Exposed tools in declaration order
    pub fn list(&self) -> &[ToolSpec] {
        &self.specs
    }

    /// Declaration of an exposed tool
    pub fn spec(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|spec| spec.name() == name)
    }

    /// Validate arguments and run a tool
    ///
    /// Exchange-side failures come back as envelopes with a non-zero code and
    /// are logged. Hidden or unknown tools, bad arguments, and missing
    /// credentials are raised without any network call.
    #[instrument(skip(self, args, ctx))]
    pub async fn invoke(&self, name: &str, args: Value, ctx: &ToolContext) -> ToolResult<ResponseEnvelope> {
        let spec = self
            .spec(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let tool = Tool::from_str(name).map_err(|_| ToolError::UnknownTool(name.to_string()))?;
        let args = ToolArgs::parse(args, spec)?;

        debug!(tool = %tool, "Invoking tool");
        let envelope = tool.run(&args, ctx).await?;

        if !envelope.is_success() {
            error!(
                tool = %tool,
                code = envelope.code,
                message = %envelope.message,
                "Tool returned an error envelope"
            );
        }
        Ok(envelope)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new(ToolMode::default())
    }
}
