pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;

/// Postgres reports unique violations as SQLSTATE 23505.
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let err_str = err.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}
