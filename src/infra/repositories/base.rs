//! Generic store traits following Interface Segregation Principle (ISP).
//!
//! One set of provided method bodies implements pagination, filtering,
//! sorting, and CRUD for every entity in the crate. Concrete stores supply
//! only a database handle and the per-entity `merge` that copies mutable
//! fields onto a loaded row. Field names arriving as strings are resolved
//! against the entity's column enum, so an unknown sort or filter field
//! fails fast instead of degrading to unsorted or unfiltered results.

use std::marker::PhantomData;
use std::str::FromStr;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityName,
    EntityTrait, FromQueryResult, IntoActiveModel, Iterable, Order, PaginatorTrait,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder,
};

use crate::errors::{AppError, AppResult};
use crate::types::{Page, Pagination, SearchFilter, SortDirection};

/// Shorthand for an entity's primary-key value type.
pub type KeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Resolve a caller-supplied field name against the entity's column enum.
///
/// The column enum is the static allow-list: names that do not map to a
/// column produce a descriptive `InvalidField` error.
fn resolve_column<E: EntityTrait>(field: &str) -> AppResult<E::Column> {
    E::Column::from_str(field)
        .map_err(|_| AppError::invalid_field(E::default().table_name(), field))
}

/// Typed handle to a row that has not been loaded.
///
/// Carries only the key, for wiring relationships without a round trip
/// to the store.
pub struct EntityKey<E: EntityTrait> {
    id: KeyOf<E>,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> std::fmt::Debug for EntityKey<E>
where
    KeyOf<E>: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EntityKey").field(&self.id).finish()
    }
}

impl<E: EntityTrait> EntityKey<E> {
    pub fn new(id: KeyOf<E>) -> Self {
        Self {
            id,
            entity: PhantomData,
        }
    }

    pub fn id(&self) -> &KeyOf<E> {
        &self.id
    }

    pub fn into_id(self) -> KeyOf<E> {
        self.id
    }
}

impl<E: EntityTrait> Clone for EntityKey<E>
where
    KeyOf<E>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            entity: PhantomData,
        }
    }
}

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadStore<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Dynamic paginated query over the entity.
    ///
    /// Builds a single-field substring predicate from `filter` (or none
    /// when the filter is empty), orders by the caller-named field in the
    /// requested direction, and returns one bounded window together with
    /// the unbounded match count. An empty result is an empty page, never
    /// an error.
    async fn read_all(
        &self,
        pagination: &Pagination,
        filter: &SearchFilter,
    ) -> AppResult<Page<M>> {
        let mut query = E::find();

        if let Some((field, value)) = filter.as_parts() {
            let column = resolve_column::<E>(field)?;
            query = query.filter(column.contains(value));
        }

        let sort_column = resolve_column::<E>(&pagination.sort_field)?;
        let direction = match pagination.sort_direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        query = query.order_by(sort_column, direction);
        // Secondary key keeps page windows stable across equal sort values
        if let Some(key) = E::PrimaryKey::iter().next() {
            query = query.order_by(key.into_column(), Order::Asc);
        }

        let paginator = query.paginate(self.db(), pagination.limit());
        let total = paginator.num_items().await?;
        let items = paginator
            .fetch_page(pagination.page.saturating_sub(1))
            .await?;

        Ok(Page::new(items, pagination.page, pagination.limit(), total))
    }

    /// Point lookup by primary key. Absence is a value, not an error.
    async fn read_by_id(&self, id: KeyOf<E>) -> AppResult<Option<M>>
    where
        KeyOf<E>: Clone + Send,
    {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Existence probe without loading the row.
    async fn exists_by_id(&self, id: KeyOf<E>) -> AppResult<bool>
    where
        KeyOf<E>: Clone + Send,
    {
        let count = E::find_by_id(id).count(self.db()).await?;
        Ok(count > 0)
    }

    /// Handle for relating to a row without loading it.
    fn reference(&self, id: KeyOf<E>) -> EntityKey<E> {
        EntityKey::new(id)
    }
}

/// Write operations (Command) - Single Responsibility
#[async_trait]
pub trait WriteStore<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A> + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Copy the caller-mutable fields of `incoming` onto a loaded row.
    ///
    /// This is the only per-entity logic in the store layer. Identifier
    /// and creation timestamp on `incoming` are ignored; implementations
    /// refresh `updated_at` themselves where the entity carries one.
    fn merge(current: &mut A, incoming: M);

    /// Insert a new row. The store assigns the id and the returned model
    /// reflects post-insert state.
    async fn create(&self, model: A) -> AppResult<M> {
        model.insert(self.db()).await.map_err(Into::into)
    }

    /// Merge `incoming` onto the stored row and persist.
    ///
    /// Returns `None` when no row with `id` exists; this is not an
    /// upsert.
    async fn update(&self, id: KeyOf<E>, incoming: M) -> AppResult<Option<M>>
    where
        KeyOf<E>: Clone + Send,
    {
        let Some(current) = E::find_by_id(id).one(self.db()).await? else {
            return Ok(None);
        };

        let mut active = current.into_active_model();
        Self::merge(&mut active, incoming);
        let updated = active.update(self.db()).await?;
        Ok(Some(updated))
    }
}

/// Delete operations - Single Responsibility
#[async_trait]
pub trait DeleteStore<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Delete one row by primary key.
    ///
    /// Existence is checked by the service layer before this call; the
    /// return value reports whether a row was actually removed.
    async fn delete_by_id(&self, id: KeyOf<E>) -> AppResult<bool>
    where
        KeyOf<E>: Clone + Send,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected > 0)
    }
}

/// Full CRUD store - Combines all operations
/// Follows Open/Closed Principle: extend by implementing individual traits
pub trait CrudStore<E, M, A>: ReadStore<E, M> + WriteStore<E, M, A> + DeleteStore<E>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A> + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudStore for types implementing all traits
impl<T, E, M, A> CrudStore<E, M, A> for T
where
    T: ReadStore<E, M> + WriteStore<E, M, A> + DeleteStore<E>,
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A> + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}
