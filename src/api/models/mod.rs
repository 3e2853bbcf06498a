pub mod data_model;
pub mod edge;
pub mod enums;
pub mod field;
pub mod node;
pub mod role;
pub mod route;
pub mod settings;

pub use data_model::Model;
pub use edge::Edge;
pub use enums::{AuthScheme, DbOperation, HttpMethod, NodeKind, OutputKind, VariableType};
pub use field::{Field, ValidationOptions, add_field, parse_option_number, remove_field};
pub use node::{
    AuthConfig, DbDeleteConfig, DbInsertConfig, DbReadConfig, DbUpdateConfig, LogicConfig, Node,
    NodeConfig, OutputConfig, Position, UrlConfig, VariableConfig, extract_path_params,
};
pub use role::{Permissions, Role, slugify};
pub use route::{FlowData, Route};
pub use settings::Settings;
