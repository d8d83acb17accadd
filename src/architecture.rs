//! The built-in architecture diagram.
//!
//! Describes a retrieval-augmented question answering system on AWS: a React
//! frontend talks to Go Lambda functions through API Gateway, which query a
//! Bedrock knowledge base backed by OpenSearch vector search, S3 document
//! storage, and DynamoDB metadata.

use crate::canvas::{Annotation, Arrow, Canvas, Highlight, Label, Shape, TextAnchor};
use crate::types::{Angle, Color, Length};

const FRONTEND: Color = Color::hex(0x61DAFB);
const API: Color = Color::hex(0xFF6B6B);
const LAMBDA: Color = Color::hex(0xFF9F43);
const BEDROCK: Color = Color::hex(0x9B59B6);
const OPENSEARCH: Color = Color::hex(0x3742FA);
const STORAGE: Color = Color::hex(0x2ED573);
const DATABASE: Color = Color::hex(0xFFA502);
const USER: Color = Color::hex(0xA4B0BE);
const FLOW: Color = Color::hex(0x2F3542);

const TECH_STACK: [&str; 9] = [
    "Technology Stack:",
    "• Frontend: React + TypeScript",
    "• Backend: Go + AWS Lambda",
    "• API: AWS API Gateway",
    "• AI: AWS Bedrock (Claude 3 Haiku)",
    "• Search: OpenSearch Serverless",
    "• Storage: Amazon S3",
    "• Database: DynamoDB",
    "• Infrastructure: AWS SAM",
];

const KEY_FEATURES: [&str; 7] = [
    "Key Features:",
    "• PDF/Text Document Upload",
    "• Vector-based Semantic Search",
    "• AI-Powered Question Answering",
    "• Real-time Chat Interface",
    "• Serverless Architecture",
    "• Japanese Language Support",
];

/// Build the full system architecture canvas.
pub fn canvas() -> Canvas {
    let mut canvas = Canvas::new(16.0, 12.0, "POC RAG Knowledge Base System Architecture");
    canvas.shapes = shapes();
    canvas.arrows = arrows();
    canvas.annotations = annotations();
    canvas
}

fn shapes() -> Vec<Shape> {
    let small = Length::points(9.0);
    vec![
        Shape::new(1.0, 9.5, 2.0, 1.0)
            .with_fill(USER)
            .with_label(Label::new("User\n(Browser)", 2.0, 10.0).bold()),
        Shape::new(6.0, 9.5, 3.0, 1.0)
            .with_fill(FRONTEND)
            .with_label(Label::new("Frontend\n(React App)", 7.5, 10.0).bold()),
        Shape::new(6.0, 7.5, 3.0, 1.0)
            .with_fill(API)
            .with_label(Label::new("API Gateway\n(REST API)", 7.5, 8.0).bold()),
        Shape::new(6.0, 5.5, 3.0, 1.0)
            .with_fill(LAMBDA)
            .with_label(Label::new("Lambda Functions\n(Go Backend)", 7.5, 6.0).bold()),
        Shape::new(2.0, 3.5, 3.0, 1.0).with_fill(BEDROCK).with_label(
            Label::new("AWS Bedrock\nKnowledge Base\n(Claude 3 Haiku)", 3.5, 4.0)
                .bold()
                .with_size(small)
                .with_color(Color::WHITE),
        ),
        Shape::new(10.0, 3.5, 3.0, 1.0).with_fill(OPENSEARCH).with_label(
            Label::new("OpenSearch\nServerless\n(Vector Search)", 11.5, 4.0)
                .bold()
                .with_size(small)
                .with_color(Color::WHITE),
        ),
        Shape::new(2.0, 1.5, 3.0, 1.0).with_fill(STORAGE).with_label(
            Label::new("Amazon S3\n(Document Storage)", 3.5, 2.0)
                .bold()
                .with_color(Color::WHITE),
        ),
        Shape::new(10.0, 5.5, 3.0, 1.0)
            .with_fill(DATABASE)
            .with_label(Label::new("DynamoDB\n(Metadata)", 11.5, 6.0).bold()),
    ]
}

fn arrows() -> Vec<Arrow> {
    [
        // user -> frontend -> api -> lambda
        (3.0, 10.0, 6.0, 10.0),
        (7.5, 9.5, 7.5, 8.5),
        (7.5, 7.5, 7.5, 6.5),
        // lambda -> bedrock, lambda -> dynamodb
        (6.5, 6.0, 4.5, 4.5),
        (8.5, 6.0, 10.5, 6.0),
        // bedrock <-> opensearch, bedrock -> s3, s3 -> opensearch
        (5.0, 4.0, 10.0, 4.0),
        (3.5, 3.5, 3.5, 2.5),
        (5.0, 2.0, 10.0, 3.5),
    ]
    .into_iter()
    .map(|(x1, y1, x2, y2)| Arrow::new(x1, y1, x2, y2).with_stroke(FLOW))
    .collect()
}

/// A small service tag pinned to a shape's top-left corner.
fn badge(text: &str, x: f64, y: f64) -> Annotation {
    Annotation::new(text, x, y)
        .bold()
        .with_anchor(TextAnchor::Start)
        .with_highlight(Highlight::new(Color::WHITE).with_opacity(0.8))
}

fn process_step(text: &str, y: f64, fill: Color) -> Annotation {
    Annotation::new(text, 0.5, y)
        .with_size(Length::points(9.0))
        .bold()
        .with_anchor(TextAnchor::Start)
        .with_highlight(Highlight::new(fill))
}

fn list_block(notes: &mut Vec<Annotation>, x: f64, top_y: f64, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        let mut note =
            Annotation::new(*line, x, top_y - i as f64 * 0.3).with_anchor(TextAnchor::Start);
        if i == 0 {
            note = note
                .bold()
                .with_highlight(Highlight::new(Color::WHITE).with_opacity(0.8));
        }
        notes.push(note);
    }
}

fn annotations() -> Vec<Annotation> {
    let mut notes = vec![
        // service badges
        badge("API", 6.2, 8.3),
        Annotation::new("λ", 6.2, 6.3)
            .with_size(Length::points(12.0))
            .bold()
            .with_color(Color::WHITE)
            .with_anchor(TextAnchor::Start),
        badge("BR", 2.2, 4.3),
        Annotation::new("OS", 10.2, 4.3)
            .bold()
            .with_color(Color::WHITE)
            .with_anchor(TextAnchor::Start)
            .with_highlight(Highlight::new(Color::WHITE).with_opacity(0.3)),
        badge("S3", 2.2, 2.3),
        badge("DB", 10.2, 6.3),
        // data flow captions
        Annotation::new("HTTP Requests", 4.5, 10.3).italic(),
        Annotation::new("REST API", 8.5, 9.0).italic(),
        Annotation::new("Function Calls", 8.5, 7.0).italic(),
        Annotation::new("RAG Query", 5.0, 5.0)
            .italic()
            .rotated(Angle::degrees(45.0)),
        Annotation::new("Metadata", 9.5, 6.3).italic(),
        Annotation::new("Vector Search", 7.5, 4.3).italic(),
        Annotation::new("Document\nRetrieval", 1.5, 3.0).italic(),
        Annotation::new("Document\nIngestion", 7.5, 2.8)
            .italic()
            .rotated(Angle::degrees(30.0)),
        // numbered request lifecycle
        process_step("1. Upload", 8.0, Color::LIGHT_BLUE),
        process_step("2. Query", 7.5, Color::LIGHT_GREEN),
        process_step("3. Retrieve", 7.0, Color::LIGHT_YELLOW),
        process_step("4. Generate", 6.5, Color::LIGHT_CORAL),
    ];

    list_block(&mut notes, 14.0, 8.5, &TECH_STACK);
    list_block(&mut notes, 14.0, 5.5, &KEY_FEATURES);

    notes
}
