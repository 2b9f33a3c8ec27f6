//! Populate a database instance with fixture records.
//!
//! Connects using `DATABASE_URL`, applies migrations, then inserts the
//! fixture data set in dependency order: classes and orders first, then
//! animals, then preserve statuses.
//!
//! Usage: `cargo run --bin seed`

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wildpreserve_db::models::{NewAnimal, NewClass, NewOrder, NewPreserveStatus, PreserveState};
use wildpreserve_db::repositories::{AnimalRepo, ClassRepo, OrderRepo, PreserveStatusRepo};
use wildpreserve_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = wildpreserve_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    wildpreserve_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    seed(&pool).await?;

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed(pool: &DbPool) -> anyhow::Result<()> {
    // Taxonomy first; animals reference it.
    let mammalia = ClassRepo::create(
        pool,
        &NewClass {
            name: "Mammalia".to_string(),
        },
    )
    .await?;
    tracing::info!(id = mammalia.id, name = %mammalia.name, "New class");

    let mut orders = Vec::new();
    for name in ["Primates", "Diprotodontia", "Carnivora"] {
        let order = OrderRepo::create(
            pool,
            &NewOrder {
                name: name.to_string(),
            },
        )
        .await?;
        tracing::info!(id = order.id, name = %order.name, "New order");
        orders.push(order);
    }
    let (primates, diprotodontia, carnivora) = (&orders[0], &orders[1], &orders[2]);

    let fixtures: [(&str, &str, &str, &[i64]); 6] = [
        (
            "Meerkat",
            "Suricata suricatta",
            "The meerkat (Suricata suricatta) or suricate is a small mongoose found in \
             southern Africa. It is characterised by a broad head, large eyes, a pointed \
             snout, long legs, a thin tapering tail, and a brindled coat pattern.",
            &[carnivora.id],
        ),
        (
            "Sugar Glider",
            "Petaurus breviceps",
            "The sugar glider (Petaurus breviceps) is a small, omnivorous, arboreal, and \
             nocturnal gliding possum belonging to the marsupial infraclass.",
            &[diprotodontia.id],
        ),
        (
            "Mohol bushbaby",
            "Galago moholi",
            "The Mohol bushbaby (Galago moholi) is a species of primate in the family \
             Galagidae which is native to mesic woodlands of the southern Afrotropics.",
            &[primates.id],
        ),
        (
            "Crab-eating macaque",
            "Macaca fascicularis",
            "The crab-eating macaque (Macaca fascicularis), also known as the long-tailed \
             macaque, is a cercopithecine primate native to Southeast Asia.",
            &[primates.id],
        ),
        (
            "Northern pig-tailed macaque",
            "Macaca leonina",
            "The northern pig-tailed macaque (Macaca leonina) is a vulnerable species of \
             macaque in the subfamily Cercopithecidae.",
            &[primates.id],
        ),
        (
            "Mona monkey",
            "Cercopithecus mona",
            "The mona monkey (Cercopithecus mona) is an Old World monkey that lives in \
             western Africa between Ghana and Cameroon.",
            &[primates.id],
        ),
    ];

    let mut animals = Vec::new();
    for (name, binomial, description, order_ids) in fixtures {
        let animal = AnimalRepo::create(
            pool,
            &NewAnimal {
                name: name.to_string(),
                binomial: binomial.to_string(),
                description: description.to_string(),
                img: "img1.png".to_string(),
                class_id: mammalia.id,
                order_ids: order_ids.to_vec(),
            },
        )
        .await?;
        tracing::info!(id = animal.id, name = %animal.name, "New animal");
        animals.push(animal);
    }

    let statuses = [
        ("Dobby", 0, PreserveState::NotInPreserve),
        ("Mini", 1, PreserveState::InPreserve),
        ("Beebit", 2, PreserveState::InPreserve),
        ("Shally", 3, PreserveState::InPreserve),
        ("YaYa", 4, PreserveState::NotInPreserve),
        ("Mona", 5, PreserveState::NotInPreserve),
    ];
    for (name, animal_index, status) in statuses {
        let record = PreserveStatusRepo::create(
            pool,
            &NewPreserveStatus {
                animal_id: animals[animal_index].id,
                name: name.to_string(),
                status,
                expected_back: None,
            },
        )
        .await?;
        tracing::info!(id = record.id, name = %record.name, "New preserve status");
    }

    Ok(())
}
