//! Default CRUD flow seeding for newly created models.
//!
//! Given a model, synthesizes the generated routes (GET list, GET by id,
//! DELETE by id), each carrying a complete default flow graph of
//! url -> db-operation -> output nodes. Deterministic templating, no layout
//! or planning involved.

use uuid::Uuid;

use crate::models::{
    DbDeleteConfig, DbOperation, DbReadConfig, Edge, Field, FlowData, HttpMethod, Model, Node,
    NodeConfig, OutputConfig, OutputKind, Position, Route, UrlConfig,
};

pub struct SeedingService;

impl SeedingService {
    /// Synthesize the default CRUD routes for a model.
    pub fn seed_crud_routes(model: &Model) -> Vec<Route> {
        let base_url = format!("/api/{}", model.name.to_lowercase());
        let by_id_url = format!("{}/:id", base_url);

        let get_all = Self::seeded_route(
            format!("Get All {}", model.name),
            HttpMethod::Get,
            &base_url,
            NodeConfig::DbFind(DbReadConfig {
                label: "Database Find".to_string(),
                model: model.name.clone(),
                operation: DbOperation::FindMany,
                query: format!("SELECT * FROM {}", model.name),
                result_var: format!("{}Result", model.name),
            }),
            Self::output_fields(model),
        );

        let get_one = Self::seeded_route(
            format!("Get One {}", model.name),
            HttpMethod::Get,
            &by_id_url,
            NodeConfig::DbFind(DbReadConfig {
                label: "Database Find".to_string(),
                model: model.name.clone(),
                operation: DbOperation::FindOne,
                query: format!("SELECT * FROM {} WHERE id=id", model.name),
                result_var: format!("{}OneResult", model.name),
            }),
            Self::output_fields(model),
        );

        let delete_one = Self::seeded_route(
            format!("Delete One {}", model.name),
            HttpMethod::Delete,
            &by_id_url,
            NodeConfig::DbDelete(DbDeleteConfig {
                label: "Database Delete".to_string(),
                model: model.name.clone(),
                operation: DbOperation::FindOne,
                query: format!("DELETE FROM {} WHERE id=id", model.name),
                result_var: format!("{}DeleteResult", model.name),
                id_field: String::new(),
            }),
            vec![Field::new("error", "boolean"), Field::new("id", "integer")],
        );

        vec![get_all, get_one, delete_one]
    }

    /// Output node field list for a model, with field types coerced to the
    /// restricted set the output definition understands.
    fn output_fields(model: &Model) -> Vec<Field> {
        model
            .fields
            .iter()
            .map(|f| Field::new(f.name.clone(), Self::coerce_output_type(&f.field_type)))
            .collect()
    }

    /// primary key and big number collapse to number, long text to string;
    /// everything else passes through.
    pub fn coerce_output_type(field_type: &str) -> String {
        match field_type {
            "primary key" | "big number" => "number".to_string(),
            "long text" => "string".to_string(),
            other => other.to_string(),
        }
    }

    fn seeded_route(
        name: String,
        method: HttpMethod,
        url: &str,
        db_config: NodeConfig,
        output_fields: Vec<Field>,
    ) -> Route {
        let uid = Uuid::new_v4().simple().to_string();
        let url_node_id = format!("url_node_{}", uid);
        let db_node_id = format!("db_node_{}", uid);
        let output_node_id = format!("output_node_{}", uid);

        let nodes = vec![
            Node {
                id: url_node_id.clone(),
                position: Position::new(100.0, 100.0),
                config: NodeConfig::Url(UrlConfig {
                    label: "URL".to_string(),
                    method,
                    path: url.to_string(),
                    fields: Vec::new(),
                    query_fields: Vec::new(),
                }),
            },
            Node {
                id: db_node_id.clone(),
                position: Position::new(100.0, 200.0),
                config: db_config,
            },
            Node {
                id: output_node_id.clone(),
                position: Position::new(100.0, 300.0),
                config: NodeConfig::Output(OutputConfig {
                    label: "Output".to_string(),
                    output_type: OutputKind::Definition,
                    fields: output_fields,
                    response_raw: String::new(),
                    status_code: 200,
                }),
            },
        ];

        let edges = vec![
            Edge {
                id: format!("url-to-db_{}", uid),
                source: url_node_id,
                target: db_node_id.clone(),
            },
            Edge {
                id: format!("db-to-output_{}", uid),
                source: db_node_id,
                target: output_node_id,
            },
        ];

        let mut route = Route::new(name, method, url);
        route.flow_data = Some(FlowData { nodes, edges });
        route
    }
}
