// src/store/seed.rs

//! Demo accounts and content created at startup.

use crate::{
    error::AppError,
    models::{
        challenge::{ChallengeOption, Difficulty, NewChallenge},
        question::{NewQuestion, TestCase},
        user::{NewUser, Role},
    },
    store::Store,
    utils::hash::hash_password,
};

pub const DEMO_PASSWORD: &str = "password123";

struct DemoStudent {
    username: &'static str,
    name: &'static str,
    class: &'static str,
    semester: u32,
}

const DEMO_STUDENTS: &[DemoStudent] = &[
    DemoStudent { username: "student1", name: "Alex Johnson", class: "CS 101", semester: 1 },
    DemoStudent { username: "alice", name: "Alice Johnson", class: "CS 101", semester: 1 },
    DemoStudent { username: "bob", name: "Bob Smith", class: "CS 101", semester: 1 },
    DemoStudent { username: "carol", name: "Carol Davis", class: "CS 102", semester: 2 },
    DemoStudent { username: "emma", name: "Emma Brown", class: "CS 201", semester: 3 },
];

fn options(pairs: &[(&str, &str)]) -> Vec<ChallengeOption> {
    pairs
        .iter()
        .map(|(id, text)| ChallengeOption {
            id: id.to_string(),
            text: text.to_string(),
        })
        .collect()
}

fn cases(pairs: &[(&str, &str)]) -> Vec<TestCase> {
    pairs
        .iter()
        .map(|(input, expected)| TestCase {
            input: input.to_string(),
            expected: expected.to_string(),
        })
        .collect()
}

/// Inserts the demo teacher, students, challenges and question bank.
///
/// Skips everything if the demo teacher already exists.
pub async fn seed_demo_data(store: &dyn Store) -> Result<(), AppError> {
    if store.find_user_by_username("teacher1").await?.is_some() {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(());
    }

    let password_hash = hash_password(DEMO_PASSWORD)?;

    let teacher = store
        .insert_user(NewUser {
            username: "teacher1".to_string(),
            password_hash: password_hash.clone(),
            role: Role::Teacher,
            name: "Dr. Sarah Chen".to_string(),
            email: "teacher1@example.com".to_string(),
            department: Some("Computer Science".to_string()),
            class: None,
            semester: None,
        })
        .await?;

    for s in DEMO_STUDENTS {
        store
            .insert_user(NewUser {
                username: s.username.to_string(),
                password_hash: password_hash.clone(),
                role: Role::Student,
                name: s.name.to_string(),
                email: format!("{}@example.com", s.username),
                department: None,
                class: Some(s.class.to_string()),
                semester: Some(s.semester),
            })
            .await?;
    }

    let challenges = [
        NewChallenge {
            title: "HTML5 Semantics".to_string(),
            question: "Which element is used to get highlighted text in HTML5?".to_string(),
            options: options(&[("u", "<u>"), ("mark", "<mark>"), ("highlight", "<highlight>")]),
            correct_answer: "mark".to_string(),
            difficulty: Difficulty::Easy,
            created_by: teacher.id,
            due_date: None,
            image_url: None,
            class: None,
            semester: None,
        },
        NewChallenge {
            title: "JavaScript Types".to_string(),
            question: "What will be the output of console.log(typeof null)?".to_string(),
            options: options(&[("A", "null"), ("B", "undefined"), ("C", "object"), ("D", "number")]),
            correct_answer: "C".to_string(),
            difficulty: Difficulty::Medium,
            created_by: teacher.id,
            due_date: None,
            image_url: None,
            class: Some("CS 101".to_string()),
            semester: Some(1),
        },
        NewChallenge {
            title: "Array Access".to_string(),
            question: "What is the time complexity of accessing an array element by index?".to_string(),
            options: options(&[("A", "O(1)"), ("B", "O(n)"), ("C", "O(log n)"), ("D", "O(n^2)")]),
            correct_answer: "A".to_string(),
            difficulty: Difficulty::Easy,
            created_by: teacher.id,
            due_date: None,
            image_url: None,
            class: None,
            semester: None,
        },
    ];

    let challenge_count = challenges.len();
    for challenge in challenges {
        store.insert_challenge(challenge).await?;
    }

    let questions = [
        NewQuestion {
            title: "Find Maximum".to_string(),
            difficulty: Difficulty::Easy,
            topic: "arrays".to_string(),
            description: "Implement findMax, returning the largest number in an array.".to_string(),
            starter_code: "function findMax(arr) {\n    // Your code here\n}".to_string(),
            test_cases: cases(&[("[1, 3, 2, 8, 5]", "8"), ("[-1, -3, -2]", "-1"), ("[42]", "42")]),
            created_by: teacher.id,
        },
        NewQuestion {
            title: "Binary Search".to_string(),
            difficulty: Difficulty::Medium,
            topic: "algorithms".to_string(),
            description: "Return the index of target in a sorted array, or -1 if absent.".to_string(),
            starter_code: "function binarySearch(arr, target) {\n    // Your code here\n}".to_string(),
            test_cases: cases(&[("[1, 3, 5, 7], 5", "2"), ("[1, 3, 5, 7], 4", "-1")]),
            created_by: teacher.id,
        },
        NewQuestion {
            title: "Reverse Linked List".to_string(),
            difficulty: Difficulty::Medium,
            topic: "data-structures".to_string(),
            description: "Reverse a singly linked list and return the new head.".to_string(),
            starter_code: "function reverseList(head) {\n    // Your code here\n}".to_string(),
            test_cases: cases(&[("[1, 2, 3]", "[3, 2, 1]"), ("[]", "[]")]),
            created_by: teacher.id,
        },
    ];

    let question_count = questions.len();
    for question in questions {
        store.insert_question(question).await?;
    }

    tracing::info!(
        "Seeded demo data: 1 teacher, {} students, {} challenges, {} questions",
        DEMO_STUDENTS.len(),
        challenge_count,
        question_count
    );

    Ok(())
}
