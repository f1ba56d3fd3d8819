//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them. Adding a new tool means adding a `with_route` line here and an entry
//! in `registry.rs`.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::CurrentDatetimeTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(CurrentDatetimeTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name.as_ref(), "get_current_datetime");
    }

    #[test]
    fn test_router_has_no_other_routes() {
        let router: ToolRouter<TestServer> = build_tool_router();
        assert!(router.has_route("get_current_datetime"));
        assert!(!router.has_route("foo"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router advertise the same tools
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
