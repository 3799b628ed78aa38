use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::env;

use mergington::database::activities_repo::{self, NewActivity};
use mergington::database::schema;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://mergington.db?mode=rwc".to_string());
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("Cannot connect to database");

    schema::init(&pool)
        .await
        .expect("Database initialization failed");

    match seed_activities(&pool).await {
        Ok(count) => {
            println!("Seeded {} activities", count);
        }
        Err(e) => {
            eprintln!("Seeding failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Clears the activities table and inserts the sample set from scratch.
async fn seed_activities(pool: &SqlitePool) -> sqlx::Result<usize> {
    let activities = sample_activities();

    activities_repo::delete_all(pool).await?;
    for activity in &activities {
        activities_repo::insert_activity(pool, activity).await?;
    }
    Ok(activities.len())
}

fn sample_activities() -> Vec<NewActivity<'static>> {
    vec![
        NewActivity {
            name: "Chess Club",
            description: "Learn strategies and compete in chess tournaments",
            schedule: "Fridays, 3:30 PM - 5:00 PM",
            max_participants: 12,
            participants: &["michael@mergington.edu", "daniel@mergington.edu"],
        },
        NewActivity {
            name: "Programming Class",
            description: "Learn programming fundamentals and build software projects",
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            max_participants: 20,
            participants: &["emma@mergington.edu", "sophia@mergington.edu"],
        },
        NewActivity {
            name: "Gym Class",
            description: "Physical education and sports activities",
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            max_participants: 30,
            participants: &["john@mergington.edu", "olivia@mergington.edu"],
        },
        NewActivity {
            name: "Soccer Team",
            description: "Join the school soccer team and compete in matches",
            schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            max_participants: 22,
            participants: &["liam@mergington.edu", "noah@mergington.edu"],
        },
        NewActivity {
            name: "Basketball Team",
            description: "Practice and play basketball with the school team",
            schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            max_participants: 15,
            participants: &["ava@mergington.edu", "mia@mergington.edu"],
        },
        NewActivity {
            name: "Art Club",
            description: "Explore your creativity through painting and drawing",
            schedule: "Thursdays, 3:30 PM - 5:00 PM",
            max_participants: 15,
            participants: &["amelia@mergington.edu", "harper@mergington.edu"],
        },
        NewActivity {
            name: "Drama Club",
            description: "Act, direct, and produce plays and performances",
            schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            max_participants: 20,
            participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
        },
        NewActivity {
            name: "Math Club",
            description: "Solve challenging problems and participate in math competitions",
            schedule: "Tuesdays, 3:30 PM - 4:30 PM",
            max_participants: 10,
            participants: &["james@mergington.edu", "benjamin@mergington.edu"],
        },
        NewActivity {
            name: "Debate Team",
            description: "Develop public speaking and argumentation skills",
            schedule: "Fridays, 4:00 PM - 5:30 PM",
            max_participants: 12,
            participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
        },
        NewActivity {
            name: "GitHub Skills",
            description: "Learn practical coding and collaboration skills with GitHub",
            schedule: "Wednesdays, 3:30 PM - 4:30 PM",
            max_participants: 25,
            participants: &[],
        },
    ]
}
