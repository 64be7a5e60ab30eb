//! MCP server exposing quick-navigation search to assistants.

use crate::state::NavState;
use crate::tools::list_navigation::handle_list_navigation;
use crate::tools::search::{QuickSearchRequest, handle_quick_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for documentation site navigation
#[derive(Clone)]
pub struct NavServer {
    /// Navigation data and its search index, shared read-only
    state: Arc<NavState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for NavServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl NavServer {
    pub fn new(state: Arc<NavState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Find documentation pages by title or section name. Case-insensitive substring match; title matches take precedence over section matches, results keep menu order and are capped at 10."
    )]
    async fn quick_search(
        &self,
        Parameters(request): Parameters<QuickSearchRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_quick_search(&self.state, request))
    }

    #[tool(description = "List every section and page reachable from the site's navigation menu.")]
    async fn list_navigation(&self) -> std::result::Result<String, String> {
        Ok(handle_list_navigation(&self.state))
    }
}

#[tool_handler]
impl ServerHandler for NavServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "quicknav: quick-navigation search over a documentation site's menu. \
                 Use quick_search with part of a page title or section name; \
                 use list_navigation to see every reachable page."
                    .to_string(),
            )
    }
}
