use sea_orm_migration::prelude::*;

use crate::m20260115_000001_reading_passage::ReadingPassage;
use crate::m20260115_000002_comprehension_question::ComprehensionQuestion;
use crate::m20260115_000003_spelling_word::SpellingWord;

#[derive(DeriveMigrationName)]
pub struct Migration;

struct Passage {
    title: &'static str,
    body: &'static str,
    difficulty: i32,
    questions: &'static [Question],
}

struct Question {
    prompt: &'static str,
    options: [&'static str; 4],
    correct_index: i32,
}

struct Word {
    word: &'static str,
    definition: &'static str,
    example_sentence: &'static str,
    difficulty: i32,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (passage_index, passage) in PASSAGES.iter().enumerate() {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(ReadingPassage::Table)
                        .columns([
                            ReadingPassage::Id,
                            ReadingPassage::Title,
                            ReadingPassage::Body,
                            ReadingPassage::Difficulty,
                        ])
                        .values_panic([
                            (passage_index as i32 + 1).into(),
                            passage.title.into(),
                            passage.body.into(),
                            passage.difficulty.into(),
                        ])
                        .to_owned(),
                )
                .await?;

            for question in passage.questions {
                let options = serde_json::to_string(&question.options)
                    .expect("question options serialize to JSON");

                manager
                    .exec_stmt(
                        Query::insert()
                            .into_table(ComprehensionQuestion::Table)
                            .columns([
                                ComprehensionQuestion::PassageId,
                                ComprehensionQuestion::Prompt,
                                ComprehensionQuestion::Options,
                                ComprehensionQuestion::CorrectIndex,
                            ])
                            .values_panic([
                                (passage_index as i32 + 1).into(),
                                question.prompt.into(),
                                Expr::val(options).cast_as(Alias::new("json")),
                                question.correct_index.into(),
                            ])
                            .to_owned(),
                    )
                    .await?;
            }
        }

        for word in WORDS {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(SpellingWord::Table)
                        .columns([
                            SpellingWord::Word,
                            SpellingWord::Definition,
                            SpellingWord::ExampleSentence,
                            SpellingWord::Difficulty,
                        ])
                        .values_panic([
                            word.word.into(),
                            word.definition.into(),
                            word.example_sentence.into(),
                            word.difficulty.into(),
                        ])
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ComprehensionQuestion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(Query::delete().from_table(ReadingPassage::Table).to_owned())
            .await?;

        manager
            .exec_stmt(Query::delete().from_table(SpellingWord::Table).to_owned())
            .await?;

        Ok(())
    }
}

static PASSAGES: &[Passage] = &[
    Passage {
        title: "The Secret Life of Honeybees",
        body: "Honeybees live together in large families called colonies. Each colony \
has one queen, a few hundred drones, and thousands of worker bees. The workers \
have many jobs: they clean the hive, feed the young, and fly out to gather nectar \
from flowers. When a worker finds a good patch of flowers, she returns to the hive \
and performs a waggle dance. The angle and length of the dance tell the other bees \
exactly where to fly. Back at the hive, the nectar is passed from bee to bee and \
slowly thickens into honey, which feeds the colony through the winter.",
        difficulty: 1,
        questions: &[
            Question {
                prompt: "What is a group of honeybees living together called?",
                options: ["A swarm", "A colony", "A flock", "A herd"],
                correct_index: 1,
            },
            Question {
                prompt: "How does a worker bee tell others where to find flowers?",
                options: [
                    "By buzzing loudly",
                    "By leaving a scent trail",
                    "By performing a waggle dance",
                    "By carrying petals back",
                ],
                correct_index: 2,
            },
            Question {
                prompt: "Why do bees make honey?",
                options: [
                    "To feed the colony through the winter",
                    "To attract more flowers",
                    "To build the hive walls",
                    "To feed the queen only",
                ],
                correct_index: 0,
            },
        ],
    },
    Passage {
        title: "A Journey to the Deep Sea",
        body: "Far below the ocean's surface lies a world of total darkness called the \
deep sea. Sunlight cannot reach deeper than about one thousand meters, so the \
animals that live there have found other ways to see and be seen. Many produce \
their own light through a chemical reaction, a trick known as bioluminescence. \
The anglerfish dangles a glowing lure above its jaws to draw in curious prey. \
Giant tube worms cluster around hot vents in the sea floor, where they survive \
without any sunlight at all, feeding on minerals carried up from inside the \
Earth. Scientists believe more species remain undiscovered in the deep sea than \
anywhere else on the planet.",
        difficulty: 2,
        questions: &[
            Question {
                prompt: "Why is the deep sea completely dark?",
                options: [
                    "The water is too salty for light",
                    "Sunlight cannot reach below about one thousand meters",
                    "Clouds block the light above the ocean",
                    "Deep-sea animals absorb all the light",
                ],
                correct_index: 1,
            },
            Question {
                prompt: "What is bioluminescence?",
                options: [
                    "A deep-sea current",
                    "A kind of underwater volcano",
                    "Light produced by a living creature",
                    "A diving technique",
                ],
                correct_index: 2,
            },
            Question {
                prompt: "How does the anglerfish catch its prey?",
                options: [
                    "It chases prey at great speed",
                    "It hides inside tube worms",
                    "It stuns prey with sound",
                    "It dangles a glowing lure above its jaws",
                ],
                correct_index: 3,
            },
        ],
    },
    Passage {
        title: "The Machine That Changed Words",
        body: "Before the fifteenth century, every book in Europe was copied out by \
hand, a labor that could take a scribe an entire year. Around 1440, a German \
goldsmith named Johannes Gutenberg combined movable metal type with a modified \
wine press to create the printing press. A single shop could suddenly produce \
hundreds of identical pages in a day. Books became cheaper, ideas traveled \
faster, and ordinary people had a reason to learn to read. Historians often \
rank the printing press among the most important inventions in human history, \
not because of the machine itself, but because of what it did to the spread of \
knowledge.",
        difficulty: 3,
        questions: &[
            Question {
                prompt: "Before the printing press, how were books in Europe produced?",
                options: [
                    "They were copied out by hand",
                    "They were imported from Asia",
                    "They were carved into stone",
                    "They were printed with wooden blocks only",
                ],
                correct_index: 0,
            },
            Question {
                prompt: "What two things did Gutenberg combine to build his press?",
                options: [
                    "Paper mills and ink brushes",
                    "Movable metal type and a modified wine press",
                    "Steam power and iron plates",
                    "Quills and parchment",
                ],
                correct_index: 1,
            },
            Question {
                prompt: "According to the passage, why do historians rank the press so highly?",
                options: [
                    "It was the first machine ever built",
                    "It made Gutenberg wealthy",
                    "It transformed how knowledge spread",
                    "It ended the need for reading aloud",
                ],
                correct_index: 2,
            },
        ],
    },
];

static WORDS: &[Word] = &[
    Word {
        word: "because",
        definition: "For the reason that; since.",
        example_sentence: "We stayed inside because it was raining.",
        difficulty: 1,
    },
    Word {
        word: "friend",
        definition: "A person you know well and like.",
        example_sentence: "My best friend lives next door.",
        difficulty: 1,
    },
    Word {
        word: "island",
        definition: "A piece of land surrounded by water.",
        example_sentence: "The ferry sails to the island twice a day.",
        difficulty: 1,
    },
    Word {
        word: "library",
        definition: "A building where books are kept for people to read or borrow.",
        example_sentence: "She returned her books to the library on Saturday.",
        difficulty: 1,
    },
    Word {
        word: "rhythm",
        definition: "A regular repeated pattern of sound or movement.",
        example_sentence: "The drummer kept a steady rhythm through the song.",
        difficulty: 2,
    },
    Word {
        word: "separate",
        definition: "To divide or keep apart.",
        example_sentence: "Please separate the recycling from the trash.",
        difficulty: 2,
    },
    Word {
        word: "necessary",
        definition: "Needed; required.",
        example_sentence: "Water is necessary for all living things.",
        difficulty: 2,
    },
    Word {
        word: "calendar",
        definition: "A chart showing the days, weeks, and months of a year.",
        example_sentence: "He marked the test date on his calendar.",
        difficulty: 2,
    },
    Word {
        word: "conscience",
        definition: "The inner sense of what is right and wrong.",
        example_sentence: "Her conscience would not let her keep the lost wallet.",
        difficulty: 3,
    },
    Word {
        word: "millennium",
        definition: "A period of one thousand years.",
        example_sentence: "The castle has stood for nearly a millennium.",
        difficulty: 3,
    },
    Word {
        word: "accommodate",
        definition: "To provide room for; to adapt to.",
        example_sentence: "The hall can accommodate three hundred guests.",
        difficulty: 3,
    },
    Word {
        word: "perseverance",
        definition: "Continued effort despite difficulty.",
        example_sentence: "Through perseverance she finally mastered the violin.",
        difficulty: 3,
    },
];
