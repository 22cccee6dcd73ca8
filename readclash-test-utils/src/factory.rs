//! Row factories for tests. Values are deliberately plain; tests override
//! what they assert on.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr};

pub async fn profile(
    db: &sea_orm::DatabaseConnection,
    username: &str,
) -> Result<entity::profile::Model, DbErr> {
    entity::profile::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set("$argon2id$test$hash".to_string()),
        avatar: ActiveValue::Set("fox".to_string()),
        experience: ActiveValue::Set(0),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn passage(
    db: &sea_orm::DatabaseConnection,
    title: &str,
) -> Result<entity::reading_passage::Model, DbErr> {
    entity::reading_passage::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        body: ActiveValue::Set(format!("A short passage about {}.", title)),
        difficulty: ActiveValue::Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn question(
    db: &sea_orm::DatabaseConnection,
    passage_id: i32,
    prompt: &str,
    correct_index: i32,
) -> Result<entity::comprehension_question::Model, DbErr> {
    entity::comprehension_question::ActiveModel {
        passage_id: ActiveValue::Set(passage_id),
        prompt: ActiveValue::Set(prompt.to_string()),
        options: ActiveValue::Set(serde_json::json!([
            "Option A",
            "Option B",
            "Option C",
            "Option D"
        ])),
        correct_index: ActiveValue::Set(correct_index),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn word(
    db: &sea_orm::DatabaseConnection,
    word: &str,
    difficulty: i32,
) -> Result<entity::spelling_word::Model, DbErr> {
    entity::spelling_word::ActiveModel {
        word: ActiveValue::Set(word.to_string()),
        definition: ActiveValue::Set(format!("Definition of {}.", word)),
        example_sentence: ActiveValue::Set(format!("A sentence using {}.", word)),
        difficulty: ActiveValue::Set(difficulty),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// One passage with three questions, enough to form a reading match.
pub async fn seed_reading_content(
    db: &sea_orm::DatabaseConnection,
) -> Result<entity::reading_passage::Model, DbErr> {
    let seeded = passage(db, "The Secret Life of Honeybees").await?;

    question(db, seeded.id, "What is a colony?", 1).await?;
    question(db, seeded.id, "What is a waggle dance?", 2).await?;
    question(db, seeded.id, "Why do bees make honey?", 0).await?;

    Ok(seeded)
}

/// A handful of spelling words, enough to form a spelling match.
pub async fn seed_spelling_words(
    db: &sea_orm::DatabaseConnection,
) -> Result<Vec<entity::spelling_word::Model>, DbErr> {
    let mut words = Vec::new();

    for (text, difficulty) in [
        ("because", 1),
        ("friend", 1),
        ("island", 1),
        ("rhythm", 2),
        ("separate", 2),
        ("necessary", 2),
    ] {
        words.push(word(db, text, difficulty).await?);
    }

    Ok(words)
}
