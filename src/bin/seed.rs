//! Seed script for development — populates a fresh database with sample data.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` and `JWT_SECRET` environment variables (reads .env).

use sqlx::PgPool;

const DEMO_USER: &str = "demo-user";

/// Lifetime of the printed demo token.
const DEMO_TOKEN_EXPIRY_SECS: i64 = 7 * 24 * 3600;

const COMPANIES: &[(&str, &str, i32)] = &[
    ("acme", "Acme Corp", 42),
    ("globex", "Globex", 17),
    ("initech", "Initech", 5),
];

const CAUSES: &[(&str, &str, &str, i32)] = &[
    ("labor", "Human rights", "Labor conditions", 31),
    ("climate", "Environment", "Climate impact", 24),
    ("animals", "Animal welfare", "Animal testing", 9),
];

const CAUSE_COMPANY_STATS: &[(&str, &str, &str, i32)] = &[
    ("acme", "labor", "Labor conditions", 25),
    ("acme", "climate", "Climate impact", 17),
    ("globex", "animals", "Animal testing", 9),
    ("globex", "climate", "Climate impact", 8),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")?;
    let jwt_secret = std::env::var("JWT_SECRET")?;
    let pool = boycott_stats::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    boycott_stats::db::run_migrations(&pool).await?;

    println!("=== Boycott Stats Seed Script ===");

    seed_platform(&pool).await?;
    seed_demo_user(&pool).await?;

    let token =
        boycott_stats::services::auth::issue_token(DEMO_USER, &jwt_secret, DEMO_TOKEN_EXPIRY_SECS)?;

    println!("\n=== Seed complete! ===");
    println!("Demo user: {DEMO_USER}");
    println!("Authorization: Bearer {token}");

    Ok(())
}

async fn seed_platform(pool: &PgPool) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        println!("[skip] Platform data already present ({count} companies)");
        return Ok(());
    }

    for (id, name, boycotts) in COMPANIES {
        sqlx::query(
            "INSERT INTO companies (company_id, company_name, boycott_count) VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(name)
        .bind(boycotts)
        .execute(pool)
        .await?;
    }

    for (id, category, desc, followers) in CAUSES {
        sqlx::query(
            "INSERT INTO causes (cause_id, category, cause_desc, follower_count) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(category)
        .bind(desc)
        .bind(followers)
        .execute(pool)
        .await?;
    }

    for (company_id, cause_id, desc, boycotts) in CAUSE_COMPANY_STATS {
        sqlx::query(
            "INSERT INTO cause_company_stats (company_id, cause_id, cause_desc, boycott_count)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(company_id)
        .bind(cause_id)
        .bind(desc)
        .bind(boycotts)
        .execute(pool)
        .await?;
    }

    println!(
        "[done] Created {} companies, {} causes, {} cause/company stats",
        COMPANIES.len(),
        CAUSES.len(),
        CAUSE_COMPANY_STATS.len()
    );
    Ok(())
}

async fn seed_demo_user(pool: &PgPool) -> anyhow::Result<()> {
    // Acme is boycotted for two causes: two rows, one company.
    let boycotts = [("acme", "labor"), ("acme", "climate"), ("globex", "animals")];
    for (company_id, cause_id) in boycotts {
        sqlx::query(
            "INSERT INTO user_boycotts (user_id, company_id, cause_id) VALUES ($1, $2, $3)
             ON CONFLICT DO NOTHING",
        )
        .bind(DEMO_USER)
        .bind(company_id)
        .bind(cause_id)
        .execute(pool)
        .await?;
    }

    for cause_id in ["labor", "climate"] {
        sqlx::query(
            "INSERT INTO user_causes (user_id, cause_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(DEMO_USER)
        .bind(cause_id)
        .execute(pool)
        .await?;
    }

    println!("[done] Seeded boycotts and follows for {DEMO_USER}");
    Ok(())
}
