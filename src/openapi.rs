//! OpenAPI document for the transfer shapes, served at `/openapi.json`.

use crate::model::{
    AnswerOption, AnswerOptionCreate, AnswerOptionUpdate, Educator, EducatorCreate, EducatorUpdate,
    Institution, InstitutionCreate, InstitutionUpdate, Lecture, LectureCreate, LectureUpdate, Question,
    QuestionCreate, QuestionUpdate, StudentAnswer, StudentAnswerCreate, StudentAnswerUpdate,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EngagED API",
        description = "API for the EngagED educational platform",
        version = "1.0.0"
    ),
    components(schemas(
        Institution, InstitutionCreate, InstitutionUpdate,
        Educator, EducatorCreate, EducatorUpdate,
        Lecture, LectureCreate, LectureUpdate,
        Question, QuestionCreate, QuestionUpdate,
        AnswerOption, AnswerOptionCreate, AnswerOptionUpdate,
        StudentAnswer, StudentAnswerCreate, StudentAnswerUpdate
    ))
)]
pub struct ApiDoc;
