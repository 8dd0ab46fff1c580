use crate::model::{AnswerOption, Educator, Entity, Institution, Lecture, Question, StudentAnswer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Timestamp,
}

#[derive(Debug)]
pub struct AdminColumn {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// One admin screen. `columns` is both the table column list (after id) and the form fields.
#[derive(Debug)]
pub struct AdminView {
    pub path: &'static str,
    pub label: &'static str,
    pub table: &'static str,
    pub columns: &'static [AdminColumn],
}

impl AdminView {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}

const fn col(name: &'static str, label: &'static str, kind: ColumnKind) -> AdminColumn {
    AdminColumn { name, label, kind }
}

pub const VIEWS: &[AdminView] = &[
    AdminView {
        path: Institution::PATH,
        label: "Institutions",
        table: Institution::TABLE,
        columns: &[
            col("institution_name", "Name", ColumnKind::Text),
            col("institution_location", "Location", ColumnKind::Text),
        ],
    },
    AdminView {
        path: Educator::PATH,
        label: "Educators",
        table: Educator::TABLE,
        columns: &[
            col("educator_name", "Name", ColumnKind::Text),
            col("educator_speciality", "Speciality", ColumnKind::Text),
        ],
    },
    AdminView {
        path: Lecture::PATH,
        label: "Lectures",
        table: Lecture::TABLE,
        columns: &[
            col("lecture_date", "Date", ColumnKind::Timestamp),
            col("lecture_title", "Title", ColumnKind::Text),
            col("educator_id", "Educator", ColumnKind::Integer),
            col("institution_id", "Institution", ColumnKind::Integer),
        ],
    },
    AdminView {
        path: Question::PATH,
        label: "Questions",
        table: Question::TABLE,
        columns: &[
            col("question_text", "Question", ColumnKind::Text),
            col("correct_answer_index", "Correct answer", ColumnKind::Integer),
            col("lecture_id", "Lecture", ColumnKind::Integer),
        ],
    },
    AdminView {
        path: AnswerOption::PATH,
        label: "Answer options",
        table: AnswerOption::TABLE,
        columns: &[
            col("answer_text", "Answer", ColumnKind::Text),
            col("option_index", "Index", ColumnKind::Integer),
            col("question_id", "Question", ColumnKind::Integer),
        ],
    },
    AdminView {
        path: StudentAnswer::PATH,
        label: "Student answers",
        table: StudentAnswer::TABLE,
        columns: &[
            col("device_id", "Device", ColumnKind::Text),
            col("answer_option_id", "Answer option", ColumnKind::Integer),
            col("question_id", "Question", ColumnKind::Integer),
        ],
    },
];

pub fn view(path: &str) -> Option<&'static AdminView> {
    VIEWS.iter().find(|v| v.path == path)
}
