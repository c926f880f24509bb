pub mod model_gateway_http;
pub mod prediction_query_postgres;
pub mod prediction_repository_postgres;
pub mod sea_orm_entity;
