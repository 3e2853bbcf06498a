#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use flow_builder_api::models::{Edge, Model, NodeKind, Permissions, Position, Role, Route};
    use flow_builder_api::models::{FlowData, HttpMethod, Node};
    use flow_builder_api::storage::ProjectStore;
    use serde_json::{Map, json};

    fn store() -> ProjectStore {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        ProjectStore::new(now)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = store();
        assert!(store.nodes().is_empty());
        assert!(store.edges().is_empty());
        assert!(store.models().is_empty());
        assert!(store.roles().is_empty());
        assert!(store.routes().is_empty());
        assert!(store.selected_node().is_none());
    }

    #[test]
    fn test_new_store_has_generated_settings() {
        let store = store();
        assert_eq!(store.settings().database_type, "mysql");
        assert_eq!(store.settings().db_name, "database_2024-06-01");
    }

    #[test]
    fn test_add_and_get_node() {
        let mut store = store();
        let node = Node::new(NodeKind::Url, Position::new(10.0, 20.0));
        let id = node.id.clone();
        store.add_node(node);

        let found = store.get_node(&id);
        assert!(found.is_some());
        assert_eq!(found.unwrap().kind(), NodeKind::Url);
    }

    #[test]
    fn test_remove_node_cascades_incident_edges() {
        let mut store = store();
        let a = Node::new(NodeKind::Url, Position::default());
        let b = Node::new(NodeKind::DbFind, Position::default());
        let c = Node::new(NodeKind::Output, Position::default());
        let (a_id, b_id, c_id) = (a.id.clone(), b.id.clone(), c.id.clone());
        store.add_node(a);
        store.add_node(b);
        store.add_node(c);
        store.add_edge(Edge::new(a_id.clone(), b_id.clone()));
        store.add_edge(Edge::new(b_id.clone(), c_id.clone()));

        assert!(store.remove_node(&b_id));

        assert_eq!(store.nodes().len(), 2);
        assert!(store.edges().is_empty());
        assert!(store.get_node(&a_id).is_some());
        assert!(store.get_node(&c_id).is_some());
    }

    #[test]
    fn test_remove_node_keeps_unrelated_edges() {
        let mut store = store();
        let a = Node::new(NodeKind::Url, Position::default());
        let b = Node::new(NodeKind::Output, Position::default());
        let lone = Node::new(NodeKind::Logic, Position::default());
        let (a_id, b_id, lone_id) = (a.id.clone(), b.id.clone(), lone.id.clone());
        store.add_node(a);
        store.add_node(b);
        store.add_node(lone);
        store.add_edge(Edge::new(a_id, b_id));

        assert!(store.remove_node(&lone_id));
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn test_remove_unknown_node_is_noop() {
        let mut store = store();
        store.add_node(Node::new(NodeKind::Url, Position::default()));

        assert!(!store.remove_node("node_does_not_exist"));
        assert_eq!(store.nodes().len(), 1);
    }

    #[test]
    fn test_remove_selected_node_clears_selection() {
        let mut store = store();
        let node = Node::new(NodeKind::Auth, Position::default());
        let id = node.id.clone();
        store.add_node(node);
        assert!(store.set_selected_node(Some(id.clone())));

        store.remove_node(&id);
        assert!(store.selected_node().is_none());
    }

    #[test]
    fn test_set_nodes_clears_stale_selection() {
        let mut store = store();
        let node = Node::new(NodeKind::Auth, Position::default());
        let id = node.id.clone();
        store.add_node(node);
        store.set_selected_node(Some(id));

        store.set_nodes(vec![Node::new(NodeKind::Url, Position::default())]);
        assert!(store.selected_node().is_none());
    }

    #[test]
    fn test_select_unknown_node_is_rejected() {
        let mut store = store();
        assert!(!store.set_selected_node(Some("node_missing".to_string())));
        assert!(store.selected_node().is_none());
    }

    #[test]
    fn test_clear_selection_with_none() {
        let mut store = store();
        let node = Node::new(NodeKind::Url, Position::default());
        let id = node.id.clone();
        store.add_node(node);
        store.set_selected_node(Some(id));

        assert!(store.set_selected_node(None));
        assert!(store.selected_node().is_none());
    }

    #[test]
    fn test_update_nodes_with_closure() {
        let mut store = store();
        store.add_node(Node::new(NodeKind::Url, Position::default()));
        store.add_node(Node::new(NodeKind::Output, Position::default()));

        store.update_nodes(|nodes| {
            nodes
                .iter()
                .filter(|n| n.kind() == NodeKind::Url)
                .cloned()
                .collect()
        });

        assert_eq!(store.nodes().len(), 1);
        assert_eq!(store.nodes()[0].kind(), NodeKind::Url);
    }

    #[test]
    fn test_update_node_data_unknown_id_is_noop() {
        let mut store = store();
        let node = Node::new(NodeKind::Logic, Position::default());
        store.add_node(node);

        let mut patch = Map::new();
        patch.insert("code".to_string(), json!("return 1;"));
        assert!(!store.update_node_data("node_missing", &patch));
    }

    #[test]
    fn test_update_node_data_merges_patch() {
        let mut store = store();
        let node = Node::new(NodeKind::Logic, Position::default());
        let id = node.id.clone();
        store.add_node(node);

        let mut patch = Map::new();
        patch.insert("code".to_string(), json!("return ctx;"));
        assert!(store.update_node_data(&id, &patch));

        let value = serde_json::to_value(store.get_node(&id).unwrap()).unwrap();
        assert_eq!(value["data"]["code"], json!("return ctx;"));
        // Untouched keys keep their defaults.
        assert_eq!(value["data"]["label"], json!("Logic"));
    }

    #[test]
    fn test_update_edges_with_closure() {
        let mut store = store();
        store.add_edge(Edge::new("a".to_string(), "b".to_string()));
        store.add_edge(Edge::new("b".to_string(), "c".to_string()));

        store.update_edges(|edges| {
            edges.iter().filter(|e| e.source == "a").cloned().collect()
        });

        assert_eq!(store.edges().len(), 1);
        assert_eq!(store.edges()[0].source, "a");
    }

    #[test]
    fn test_remove_edge() {
        let mut store = store();
        let edge = Edge::new("n1".to_string(), "n2".to_string());
        let id = edge.id.clone();
        store.add_edge(edge);

        assert!(store.remove_edge(&id));
        assert!(!store.remove_edge(&id));
        assert!(store.edges().is_empty());
    }

    #[test]
    fn test_model_update_and_lookup() {
        let mut store = store();
        let mut model = Model::new("User");
        store.add_model(model.clone());

        model.name = "Account".to_string();
        assert!(store.update_model(model.clone()));
        assert_eq!(store.get_model(&model.id).unwrap().name, "Account");

        let phantom = Model::new("Phantom");
        assert!(!store.update_model(phantom));
        assert_eq!(store.models().len(), 1);
    }

    #[test]
    fn test_role_delete_is_silent_for_unknown_ids() {
        let mut store = store();
        let role = Role::new("Admin", Permissions::default());
        let id = role.id.clone();
        store.add_role(role);

        store.delete_role("role_missing");
        assert_eq!(store.roles().len(), 1);

        store.delete_role(&id);
        assert!(store.roles().is_empty());
    }

    #[test]
    fn test_update_role_replaces_matching_id() {
        let mut store = store();
        let mut role = Role::new("Editor", Permissions::default());
        store.add_role(role.clone());

        role.permissions.can_edit_users = true;
        assert!(store.update_role(role.clone()));
        assert!(store.get_role(&role.id).unwrap().permissions.can_edit_users);
    }

    #[test]
    fn test_set_route_flow() {
        let mut store = store();
        let route = Route::new("List Users", HttpMethod::Get, "/api/users");
        let id = route.id.clone();
        store.add_route(route);
        assert!(store.get_route(&id).unwrap().flow_data.is_none());

        let flow = FlowData {
            nodes: vec![Node::new(NodeKind::Url, Position::default())],
            edges: Vec::new(),
        };
        assert!(store.set_route_flow(&id, flow));
        let saved = store.get_route(&id).unwrap().flow_data.as_ref().unwrap();
        assert_eq!(saved.nodes.len(), 1);

        assert!(!store.set_route_flow("route_missing", FlowData::default()));
    }

    #[test]
    fn test_update_settings_replaces_wholesale() {
        let mut store = store();
        let mut settings = store.settings().clone();
        settings.db_host = "db.internal".to_string();
        settings.db_port = "3307".to_string();
        store.update_settings(settings);

        assert_eq!(store.settings().db_host, "db.internal");
        assert_eq!(store.settings().db_port, "3307");
    }
}
