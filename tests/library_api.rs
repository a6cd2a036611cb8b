use chrono::NaiveDate;
use likhit::{
    AppError, GenerationError, LetterType, PromptText, RawFields, Session, TextGenerator,
    assemble_prompt, collect_request, generate_letter, letter_spec, letter_types,
};
use std::cell::RefCell;

struct EchoGenerator {
    prompts: RefCell<Vec<String>>,
}

impl TextGenerator for EchoGenerator {
    fn generate_text(&self, prompt: &PromptText) -> Result<String, GenerationError> {
        self.prompts.borrow_mut().push(prompt.as_str().to_string());
        Ok("Dear Admissions Committee,\n\nI am writing to ask about admission.".to_string())
    }
}

fn college_input() -> RawFields {
    [
        ("recipientName", "Admissions Committee"),
        ("recipientTitle", "Admissions Office"),
        ("institutionName", "Stanford University"),
        ("yourName", "Ana Lee"),
        ("purposeOfLetter", "Inquiry about graduate admission requirements"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn public_api_generation_contract() {
    assert_eq!(letter_types().len(), 4);
    let spec = letter_spec("college/school").expect("college spec");
    assert_eq!(spec.letter_type, LetterType::CollegeSchool);

    let request = collect_request(LetterType::CollegeSchool, &college_input())
        .expect("college input should validate");
    let prompt = assemble_prompt(&request).expect("prompt");
    assert!(prompt.as_str().contains("Letter Type: College/School\n"));

    let generator = EchoGenerator { prompts: RefCell::new(Vec::new()) };
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let letter = generate_letter(&generator, request, today).expect("letter");

    assert!(letter.as_str().contains("\n\nDecember 1, 2025\n\nDear Admissions Committee,"));
    assert_eq!(generator.prompts.borrow().as_slice(), [prompt.into_string()]);
}

#[test]
fn public_api_session_contract() {
    let generator = EchoGenerator { prompts: RefCell::new(Vec::new()) };
    let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
    let mut session = Session::new();

    session.select(LetterType::CollegeSchool).expect("select");
    let err = session.submit(&RawFields::new()).expect_err("empty form must fail");
    assert!(matches!(err, AppError::InvalidFields(_)));

    session.submit(&college_input()).expect("submit");
    session.complete(&generator, today).expect("complete");
    assert!(session.result().expect("result").is_ok());

    session.reset();
    assert!(session.pending_request().is_none());
}

#[test]
fn requests_are_only_built_from_validated_input() {
    let err = collect_request(LetterType::Job, &RawFields::new())
        .expect_err("empty Job input must not produce a request");
    let AppError::InvalidFields(errors) = err else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.violations.len(), 5);

    let request = collect_request(LetterType::CollegeSchool, &college_input()).expect("request");
    let college = letter_spec("college").expect("college spec");
    let labels: Vec<_> =
        request.user_details().iter().map(|entry| entry.label.as_str()).collect();
    let expected: Vec<_> = college.fields.iter().map(|field| field.label).collect();
    assert_eq!(labels, expected);
}
