pub mod gemini_http;
pub mod output_file;
