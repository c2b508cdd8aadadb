mod chart;
mod json_contract;
mod layout_engine;

pub use chart::{FloatingBarChart, RenderedChart};
pub use json_contract::{
    LAYOUT_JSON_SCHEMA_V1, LayoutJsonContractV1, bar_values_from_json_str,
    layout_json_contract_v1_pretty,
};
pub use layout_engine::{BarPrimitives, bar_primitives, layout, layout_context, plan_layout};
