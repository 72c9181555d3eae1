//! GraphQL schema: query and mutation roots.

use async_graphql::{Context, EmptySubscription, Object, Result, Schema, ID};

use crate::adapter::VaultAdapter;
use crate::types::{Record, Token, User};

/// The gateway schema.
pub type VaultSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema with `adapter` available to every resolver.
pub fn build_schema(adapter: VaultAdapter) -> VaultSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(adapter)
        .finish()
}

fn ids_to_strings(ids: Option<Vec<ID>>) -> Option<Vec<String>> {
    ids.map(|ids| ids.into_iter().map(|id| id.0).collect())
}

/// Read operations.
#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Records of a table by id. Plain-text values unless `tokensBool` is true.
    async fn get_records(
        &self,
        ctx: &Context<'_>,
        table: String,
        ids: Option<Vec<ID>>,
        tokens_bool: Option<bool>,
    ) -> Result<Option<Vec<Option<Record>>>> {
        let adapter = ctx.data::<VaultAdapter>()?;
        let records = adapter
            .get_records(table, ids_to_strings(ids), tokens_bool)
            .await;

        Ok(records.map(|records| records.into_iter().map(|r| Some(r.into())).collect()))
    }

    /// Original values of the given tokens.
    async fn detokenize(
        &self,
        ctx: &Context<'_>,
        tokens: Option<Vec<String>>,
    ) -> Result<Option<Vec<Option<Token>>>> {
        let adapter = ctx.data::<VaultAdapter>()?;
        let records = adapter.detokenize(tokens).await;

        Ok(records.map(|records| records.into_iter().map(|r| Some(r.into())).collect()))
    }

    /// Users by id.
    async fn get_users(
        &self,
        ctx: &Context<'_>,
        ids: Option<Vec<ID>>,
        tokens_bool: Option<bool>,
    ) -> Result<Option<Vec<Option<User>>>> {
        let adapter = ctx.data::<VaultAdapter>()?;
        let records = adapter.get_users(ids_to_strings(ids), tokens_bool).await;

        Ok(records.map(|records| records.into_iter().map(|r| Some(r.into())).collect()))
    }
}

/// Write operations.
#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Inserts a record into table `name`. `fields` is a JSON object of
    /// column values; the returned record carries tokens.
    async fn insert_record(
        &self,
        ctx: &Context<'_>,
        name: String,
        fields: String,
    ) -> Result<Option<Record>> {
        let adapter = ctx.data::<VaultAdapter>()?;
        Ok(adapter.insert_record(name, &fields).await.map(Into::into))
    }
}
