//! The starter collection installed by the `seed` command.
//!
//! Five representative prompts with ratings and usage counters already in
//! place, so browsing and the stats screen have something to show right
//! away. Seeding replaces the data file wholesale and bypasses the normal
//! submission path.

use chrono::Utc;

use crate::core::data::{Prompt, PromptCollection};

pub fn starter_collection() -> PromptCollection {
    let now = Utc::now();

    let entry = |id: u64,
                 title: &str,
                 category: &str,
                 body: &str,
                 tags: &[&str],
                 rating: f64,
                 votes: u32,
                 usage_count: u64| Prompt {
        id,
        title: title.to_string(),
        category: category.to_string(),
        prompt: body.to_string(),
        author: "Daniel Jährling".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        rating,
        votes,
        usage_count,
        created_at: now,
        comments: Vec::new(),
    };

    PromptCollection {
        prompts: vec![
            entry(
                1,
                "API Client Generator",
                "API Development",
                API_CLIENT_BODY,
                &["python", "api", "rest", "client", "testing"],
                4.5,
                2,
                5,
            ),
            entry(
                2,
                "Data Pipeline Builder",
                "Data Processing",
                DATA_PIPELINE_BODY,
                &["python", "etl", "pipeline", "batch", "data-processing"],
                5.0,
                3,
                8,
            ),
            entry(
                3,
                "Pytest Test Suite Generator",
                "Testing",
                PYTEST_SUITE_BODY,
                &["python", "testing", "pytest", "tdd", "quality"],
                4.8,
                5,
                12,
            ),
            entry(
                4,
                "CLI Tool with argparse",
                "DevOps/CI-CD",
                CLI_TOOL_BODY,
                &["python", "cli", "argparse", "automation"],
                4.2,
                4,
                15,
            ),
            entry(
                5,
                "Refactoring: Extract Method",
                "Refactoring",
                EXTRACT_METHOD_BODY,
                &["refactoring", "clean-code", "maintainability"],
                4.6,
                3,
                7,
            ),
        ],
    }
}

const API_CLIENT_BODY: &str = "Erstelle einen Python REST API Client mit folgenden Anforderungen:

ARCHITEKTUR:
- BaseClient Klasse mit gemeinsamer Logik
- Spezifische Endpoint-Methoden als Subclass
- Dependency Injection für Configuration

FEATURES:
- Retry Logic mit exponential backoff (tenacity)
- Timeout Configuration
- Request/Response Logging
- Type Hints für alle Methoden
- Pydantic Models für Request/Response

ERROR HANDLING:
- Custom Exceptions (APIError, AuthenticationError, RateLimitError)
- Structured Error Messages mit Context
- Automatic Token Refresh bei 401

TESTING:
- pytest mit responses/httpx-mock
- Fixtures für API Responses
- Edge Cases (Timeout, 5xx, Rate Limit)

CODE QUALITY:
- Black formatiert
- Type Hints
- Docstrings (Google Style)
- Logging statt Print";

const DATA_PIPELINE_BODY: &str = "Erstelle eine Data Processing Pipeline mit folgender Architektur:

PIPELINE STAGES:
1. Input Stage: Multi-Format Reader (CSV, Excel, JSON, XML)
2. Validation Stage: Schema Validation mit Pydantic
3. Transformation Stage: Business Logic
4. Output Stage: Multi-Format Writer

FEATURES:
- Streaming für große Dateien (nicht alles in Memory)
- Progress Bar (tqdm)
- Partial Resume bei Fehler (Checkpoint-System)
- Parallel Processing (ThreadPoolExecutor/ProcessPoolExecutor)
- Dry-Run Mode für Testing

ERROR HANDLING:
- Validation Errors sammeln (nicht bei erstem Fehler abbrechen)
- Error Report mit Zeilen-Nummern
- Quarantine für fehlerhafte Records
- Retry-Mechanismus für transiente Fehler

MONITORING:
- Structured Logging mit Context
- Metrics (processed, failed, skipped)
- Execution Time Tracking
- Memory Usage Monitoring

CLI:
- argparse mit Subcommands
- Config File Support (YAML/JSON)
- Verbose/Debug Modes";

const PYTEST_SUITE_BODY: &str = "Generiere eine vollständige Pytest Test Suite für die gegebene Funktion/Klasse:

REQUIREMENTS:
- Fixtures für Setup/Teardown
- Parametrized Tests für verschiedene Inputs
- Edge Cases (None, Empty, Invalid)
- Mock externe Dependencies
- Assert mit aussagekräftigen Messages

COVERAGE:
- Happy Path
- Error Cases
- Boundary Conditions
- Type Validation

STRUCTURE:
- Arrange-Act-Assert Pattern
- Descriptive Test Names (test_should_...)
- Docstrings für komplexe Tests

QUALITY:
- Type Hints
- pytest-cov für Coverage Report
- pytest-mock für Mocking";

const CLI_TOOL_BODY: &str = "Erstelle ein Python CLI-Tool mit argparse:

REQUIREMENTS:
- Subcommands für verschiedene Operationen
- Required und Optional Arguments
- Type Validation
- Help Messages
- Config File Support (optional)

FEATURES:
- Verbose/Debug Modes
- Dry-Run Option
- Output Format (JSON, YAML, Table)
- Exit Codes (0=success, 1=error)

ERROR HANDLING:
- Argument Validation
- User-friendly Error Messages
- Logging statt Print

QUALITY:
- Type Hints
- Docstrings
- No hardcoded paths
- Environment-agnostic";

const EXTRACT_METHOD_BODY: &str = "Refactore die gegebene Funktion durch Extract Method:

GOALS:
- Reduziere Komplexität (max 10 Zeilen pro Funktion)
- Single Responsibility Principle
- Verbessere Lesbarkeit
- Erhöhe Testbarkeit

APPROACH:
- Identifiziere logische Blöcke
- Extrahiere in separate Funktionen
- Aussagekräftige Namen
- Type Hints hinzufügen
- Docstrings für neue Funktionen

PRESERVE:
- Funktionalität (keine Behavior-Änderung)
- Bestehende Tests (sollten weiter funktionieren)
- Public API

IMPROVE:
- Error Handling
- Edge Cases
- Performance (wenn möglich)";
