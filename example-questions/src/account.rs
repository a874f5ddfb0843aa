use qav::{
    CompactListValidator, DynamicFilter, ListValidator, Question, QuestionSet, SubFilter,
    TupleValidator,
};

/// Login shells as (path, description) pairs.
pub const SHELLS: [(&str, &str); 4] = [
    ("/bin/bash", "Bourne again shell"),
    ("/bin/sh", "POSIX shell"),
    ("/bin/zsh", "Z shell"),
    ("/usr/bin/fish", "Friendly interactive shell"),
];

const GROUPS: [&str; 6] = ["admins", "cbcb", "cbcb-admins", "mc2", "staff", "umiacs"];

/// Questions for creating a user account.
///
/// The login name is asked as a sub-question of the full name so its prompt
/// can mention it. The primary group is limited to groups of the chosen
/// department, and the secondary groups exclude the primary one.
pub fn user_account() -> QuestionSet {
    let mut set = QuestionSet::new();
    set.add(
        Question::new("Full name", "full_name")
            .printable_name("Name")
            .subquestion(Question::new("Login for %(full_name)s", "login")),
    )
    .add(
        Question::new("Department [cbcb/mc2/umiacs]", "department")
            .printable_name("Department")
            .validator(CompactListValidator::new(["cbcb", "mc2", "umiacs"])),
    )
    .add(
        Question::new("Primary group", "group")
            .printable_name("Group")
            .validator(ListValidator::new(GROUPS).filter(SubFilter::new("department"))),
    )
    .add(
        Question::new("Secondary group", "secondary_groups")
            .printable_name("Secondary groups")
            .multiple()
            .validator(ListValidator::new(GROUPS).filter(DynamicFilter::with_answers(
                |candidate, answers| {
                    answers
                        .get("group")
                        .is_some_and(|group| group.to_string() == candidate)
                },
            ))),
    )
    .add(
        Question::new("Login shell", "shell")
            .printable_name("Shell")
            .validator(TupleValidator::new(SHELLS)),
    );
    set
}
