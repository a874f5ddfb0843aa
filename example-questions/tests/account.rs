use example_questions::{SHELLS, user_account};
use qav::{AnswerValue, ScriptedConsole};

#[test]
fn test_user_account() {
    let mut set = user_account();
    let mut console = ScriptedConsole::new([
        "Marcus Tullius Cicero",
        "cicero",
        "CBCB",
        "1",
        "cbcb-admins",
        "0",
        "staff",
        ".",
        "2",
        "yes",
    ]);

    let answers = set
        .ask_and_confirm(&mut console, &[], true)
        .unwrap()
        .unwrap();

    assert_eq!(answers.get_string("login").unwrap(), "cicero");
    assert_eq!(answers.get_string("department").unwrap(), "cbcb");
    assert_eq!(answers.get_string("group").unwrap(), "cbcb-admins");
    assert_eq!(
        answers.get("secondary_groups"),
        Some(&AnswerValue::from(vec!["admins", "staff"]))
    );
    assert_eq!(answers.get_string("shell").unwrap(), SHELLS[2].0);

    assert_eq!(console.prompts()[1], "Login for Marcus Tullius Cicero: ");
    assert!(
        console
            .output()
            .contains(&"ERROR: cbcb-admins is not a valid choice.".to_string())
    );
}

#[test]
fn test_primary_group_choices_follow_department() {
    let mut set = user_account();
    let mut console = ScriptedConsole::new([
        "Marcus Tullius Cicero",
        "cicero",
        "mc2",
        "0",
        ".",
        "0",
    ]);

    let answers = set.ask(&mut console).unwrap();

    assert_eq!(answers.get_string("group").unwrap(), "mc2");
    assert!(console.output().contains(&" [0] - mc2".to_string()));
}
