use crate::{AnswerTable, CompactListValidator, Console, ListPack, QavError, Question};

const CONFIRM_PROMPT: &str = "Are these answers correct? [yes/abort/retry]";
const CONFIRM_KEY: &str = "confirm";

/// An ordered list of questions sharing one answer table.
///
/// Later questions see the answers to earlier ones. The table is kept between
/// runs, so asking the set again offers the previous answers as defaults.
#[derive(Debug, Default)]
pub struct QuestionSet {
    answers: AnswerTable,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a question.
    pub fn add(&mut self, question: Question) -> &mut Self {
        self.questions.push(question);
        self
    }

    /// Remove the first question equal to `question`.
    ///
    /// # Errors
    /// [`QavError::NotInSet`] if the set holds no such question.
    pub fn remove(&mut self, question: &Question) -> Result<&mut Self, QavError> {
        let position = self
            .questions
            .iter()
            .position(|q| q == question)
            .ok_or_else(|| QavError::NotInSet(question.key().to_string()))?;
        self.questions.remove(position);
        Ok(self)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Everything answered so far.
    pub fn answers(&self) -> &AnswerTable {
        &self.answers
    }

    /// Ask every question in order.
    ///
    /// # Errors
    /// Whatever the console's input source reports. Answers accepted before
    /// the failure stay in [`QuestionSet::answers`].
    pub fn ask<C: Console>(&mut self, console: &mut C) -> Result<AnswerTable, QavError> {
        for question in &mut self.questions {
            let answered = question.ask(&self.answers, console)?;
            self.answers.extend(answered);
        }
        Ok(self.answers.clone())
    }

    /// Ask every question, show the answers and ask whether they are correct.
    ///
    /// `extras` are shown next to the answers without being asked, before them
    /// when `prepend` is set and after them otherwise.
    ///
    /// # Returns
    /// * `Ok(Some(answers))` when confirmed with `yes`
    /// * `Ok(None)` when aborted
    ///
    /// `retry` asks the whole set again, offering the previous answers as
    /// defaults.
    pub fn ask_and_confirm<C: Console>(
        &mut self,
        console: &mut C,
        extras: &[(&str, &str)],
        prepend: bool,
    ) -> Result<Option<AnswerTable>, QavError> {
        let mut confirm = Question::new(CONFIRM_PROMPT, CONFIRM_KEY)
            .validator(CompactListValidator::new(["yes", "abort", "retry"]));

        loop {
            let answers = self.ask(console)?;
            console.print(&self.summary(&answers, extras, prepend).to_string());

            let reply = confirm.ask(&AnswerTable::new(), console)?;
            match reply.get_string(CONFIRM_KEY) {
                Ok("yes") => return Ok(Some(answers)),
                Ok("retry") => tracing::debug!("answers rejected, asking again"),
                _ => return Ok(None),
            }
        }
    }

    fn summary(&self, answers: &AnswerTable, extras: &[(&str, &str)], prepend: bool) -> ListPack {
        let mut pack = ListPack::new(self.questions.iter().map(|q| {
            let value = answers
                .get(q.key())
                .map(ToString::to_string)
                .unwrap_or_default();
            (q.name(), value)
        }));

        if prepend {
            for (label, value) in extras.iter().rev() {
                pack.prepend(*label, *value);
            }
        } else {
            for (label, value) in extras {
                pack.append(*label, *value);
            }
        }
        pack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BOLD, OFF, ScriptedConsole};

    fn set() -> QuestionSet {
        let mut set = QuestionSet::new();
        set.add(Question::new("Name", "name"))
            .add(Question::new("Occupation", "occupation"));
        set
    }

    #[test]
    fn ask_threads_answers() {
        let mut set = QuestionSet::new();
        set.add(Question::new("Name", "name"))
            .add(Question::new("What does %(name)s do", "occupation"));
        let mut console = ScriptedConsole::new(["Cicero", "orator"]);

        let answers = set.ask(&mut console).unwrap();

        assert_eq!(answers.get_string("name").unwrap(), "Cicero");
        assert_eq!(answers.get_string("occupation").unwrap(), "orator");
        assert_eq!(console.prompts(), ["Name: ", "What does Cicero do: "]);
        assert_eq!(set.answers(), &answers);
    }

    #[test]
    fn remove_questions() {
        let mut set = set();
        set.remove(&Question::new("Name", "name")).unwrap();
        assert_eq!(set.questions().len(), 1);

        let err = set.remove(&Question::new("Name", "name")).unwrap_err();
        assert!(matches!(err, QavError::NotInSet(key) if key == "name"));
    }

    #[test]
    fn confirm_yes_returns_answers() {
        let mut set = set();
        let mut console = ScriptedConsole::new(["Cicero", "orator", "yes"]);

        let answers = set.ask_and_confirm(&mut console, &[], true).unwrap().unwrap();

        assert_eq!(answers.get_string("name").unwrap(), "Cicero");
        assert!(!answers.contains(CONFIRM_KEY));
        assert_eq!(
            console.output(),
            [format!("\n{BOLD}name{OFF}: Cicero  {BOLD}occupation{OFF}: orator  ")]
        );
        assert_eq!(console.prompts().last().unwrap(), &format!("{CONFIRM_PROMPT}: "));
    }

    #[test]
    fn confirm_abort_returns_none() {
        let mut set = set();
        let mut console = ScriptedConsole::new(["Cicero", "orator", "abort"]);
        assert!(set.ask_and_confirm(&mut console, &[], true).unwrap().is_none());
    }

    #[test]
    fn confirm_retry_asks_again_with_defaults() {
        let mut set = set();
        let mut console =
            ScriptedConsole::new(["Cicero", "orator", "retry", "", "consul", "YES"]);

        let answers = set.ask_and_confirm(&mut console, &[], true).unwrap().unwrap();

        assert_eq!(answers.get_string("name").unwrap(), "Cicero");
        assert_eq!(answers.get_string("occupation").unwrap(), "consul");
        assert_eq!(
            console.prompts(),
            [
                "Name: ",
                "Occupation: ",
                "Are these answers correct? [yes/abort/retry]: ",
                "Name [Cicero]: ",
                "Occupation [orator]: ",
                "Are these answers correct? [yes/abort/retry]: ",
            ]
        );
    }

    #[test]
    fn confirm_rejects_unknown_reply() {
        let mut set = set();
        let mut console = ScriptedConsole::new(["Cicero", "orator", "maybe", "abort"]);
        assert!(set.ask_and_confirm(&mut console, &[], true).unwrap().is_none());
        assert_eq!(
            console.output().last().unwrap(),
            "ERROR: Please choose yes/abort/retry."
        );
    }

    #[test]
    fn extras_are_prepended_in_order() {
        let mut set = set();
        let mut console = ScriptedConsole::new(["Cicero", "orator", "yes"]);
        set.ask_and_confirm(&mut console, &[("a", "1"), ("b", "2")], true)
            .unwrap();
        assert_eq!(
            console.output()[0],
            format!(
                "\n{BOLD}a{OFF}: 1  {BOLD}b{OFF}: 2  {BOLD}name{OFF}: Cicero  \
                 {BOLD}occupation{OFF}: orator  "
            )
        );
    }

    #[test]
    fn extras_are_appended() {
        let mut set = set();
        let mut console = ScriptedConsole::new(["Cicero", "orator", "yes"]);
        set.ask_and_confirm(&mut console, &[("a", "1")], false).unwrap();
        assert!(console.output()[0].ends_with(&format!("{BOLD}a{OFF}: 1  ")));
    }

    #[test]
    fn missing_answers_render_empty() {
        let mut set = QuestionSet::new();
        set.add(
            Question::new("Pick", "pick")
                .printable_name("Pick")
                .validator(crate::ListValidator::new(Vec::<String>::new())),
        );
        let mut console = ScriptedConsole::new(["yes"]);
        let answers = set.ask_and_confirm(&mut console, &[], true).unwrap().unwrap();
        assert!(answers.is_empty());
        assert_eq!(console.output(), [format!("\n{BOLD}Pick{OFF}:   ")]);
    }
}
