pub mod completion_client;
pub mod evaluation_service;
pub mod host_report;
pub mod quiz_service;
pub mod scenario_session;
pub mod session_controller;
pub mod transcript_parser;
