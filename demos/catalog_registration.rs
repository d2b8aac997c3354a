/// Example: convention-based registration from a service catalog.
///
/// Catalogs a small application's services, runs the registration pass,
/// and prints the resulting record stream.

use scrutineer::{
    Lifetime, Resolver, ScopedService, Service, ServiceCatalog, ServiceCollection,
    ServiceCollectionCatalogExt, SingletonService,
};
use std::sync::Arc;

// ===== Service traits =====

trait ConnectionPool: Service {
    fn dsn(&self) -> String;
}

trait UserRepository: Service {
    fn find(&self, id: u32) -> String;
}

trait RequestIds: Service {
    fn next(&self) -> u64;
}

// ===== Implementations =====

struct PostgresPool {
    dsn: String,
}

impl Service for PostgresPool {}
impl SingletonService for PostgresPool {}
impl ConnectionPool for PostgresPool {
    fn dsn(&self) -> String {
        self.dsn.clone()
    }
}

struct PostgresUserRepository {
    pool: Arc<dyn ConnectionPool>,
}

impl Service for PostgresUserRepository {}
impl ScopedService for PostgresUserRepository {}
impl UserRepository for PostgresUserRepository {
    fn find(&self, id: u32) -> String {
        format!("user-{} via {}", id, self.pool.dsn())
    }
}

struct SequentialRequestIds;

impl Service for SequentialRequestIds {}
impl RequestIds for SequentialRequestIds {
    fn next(&self) -> u64 {
        1
    }
}

fn main() {
    let mut catalog = ServiceCatalog::new();
    catalog
        .add_type::<PostgresPool>()
        .as_singleton()
        .implements::<dyn ConnectionPool, _>(|_| {
            Arc::new(PostgresPool { dsn: "postgres://localhost/app".to_string() })
        });
    catalog
        .add_type::<PostgresUserRepository>()
        .as_scoped()
        .implements::<dyn UserRepository, _>(|r| {
            Arc::new(PostgresUserRepository {
                pool: r.get_required_trait::<dyn ConnectionPool>(),
            })
        });
    // No lifetime claim here, so the pass default applies.
    catalog
        .add_type::<SequentialRequestIds>()
        .implements::<dyn RequestIds, _>(|_| Arc::new(SequentialRequestIds));

    let mut services = ServiceCollection::new();
    services.add_services_from_with(&catalog, Lifetime::Transient);

    println!("registered {} services:", services.len());
    for record in services.iter() {
        println!(
            "  {:<45} <- {:<55} [{:?}]",
            record.type_name(),
            record.impl_type_name().unwrap_or("<factory>"),
            record.lifetime()
        );
    }
}
