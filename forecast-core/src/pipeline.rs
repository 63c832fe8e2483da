use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::{
    error::ForecastError,
    export::{OutputPaths, write_outputs},
    parse::parse_entries,
    project::project_records,
    source::ForecastSource,
};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records: usize,
    pub outputs: OutputPaths,
    pub fetched_at: DateTime<Utc>,
}

/// Fetch, parse, project and export the forecast.
///
/// Stops at the first failing stage; nothing is written unless fetching,
/// parsing and projection all succeeded. An empty body is a fetch failure.
#[instrument(skip_all)]
pub async fn run(source: &dyn ForecastSource, outputs: &OutputPaths) -> Result<RunSummary, ForecastError> {
    let body = source.fetch().await?;
    if body.is_empty() {
        error!("Response body is empty; nothing to export");
        return Err(ForecastError::EmptyBody);
    }
    let fetched_at = Utc::now();

    let entries = parse_entries(&body).inspect_err(|e| error!("{e}"))?;
    let records = project_records(&entries).inspect_err(|e| error!("{e}"))?;
    info!("Projected {} forecast records", records.len());

    write_outputs(&records, outputs).await?;

    Ok(RunSummary {
        records: records.len(),
        outputs: outputs.clone(),
        fetched_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::HttpSettings,
        error::ErrorKind,
        model::ForecastRecord,
        source::{HttpForecastSource, StaticSource},
    };
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"[
        {"location":{"location_id":"St001","location_name":"Langkawi"},"date":"2024-06-01",
         "morning_forecast":"Berjerebu","afternoon_forecast":"Ribut petir","night_forecast":"Tiada hujan",
         "summary_forecast":"Ribut petir di beberapa tempat","summary_when":"Petang","min_temp":25,"max_temp":33},
        {"location":{"location_name":"KL"},"date":"2024-01-01","min_temp":24,"max_temp":33}
    ]"#;

    async fn run_static(body: &str) -> (tempfile::TempDir, OutputPaths, Result<RunSummary, ForecastError>) {
        let dir = tempfile::tempdir().expect("tempdir");
        let outputs = OutputPaths::in_dir(dir.path());
        let res = run(&StaticSource(body.to_string()), &outputs).await;
        (dir, outputs, res)
    }

    #[tokio::test]
    async fn writes_csv_and_json_for_every_entry() {
        let (_dir, outputs, res) = run_static(SAMPLE).await;

        let summary = res.expect("pipeline succeeds");
        assert_eq!(summary.records, 2);

        let csv = std::fs::read_to_string(&outputs.csv).expect("csv written");
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], "KL,2024-01-01,N/A,N/A,N/A,N/A,N/A,24,33");

        let json = std::fs::read_to_string(&outputs.json).expect("json written");
        let records: Vec<ForecastRecord> = serde_json::from_str(&json).expect("valid json");
        assert_eq!(records[0].location, "Langkawi");
        assert_eq!(records[0].summary, "Ribut petir di beberapa tempat");
        assert_eq!(records[1].morning, "N/A");
    }

    #[tokio::test]
    async fn empty_array_writes_header_and_empty_list() {
        let (_dir, outputs, res) = run_static("[]").await;

        assert_eq!(res.expect("pipeline succeeds").records, 0);
        assert_eq!(
            std::fs::read_to_string(&outputs.csv).unwrap(),
            "Location,Date,Morning,Afternoon,Night,Summary,SummaryWhen,MinTemp,MaxTemp\n"
        );
        assert_eq!(std::fs::read_to_string(&outputs.json).unwrap().trim_end(), "[]");
    }

    #[tokio::test]
    async fn empty_body_is_a_fetch_failure() {
        let (_dir, outputs, res) = run_static("").await;

        let err = res.unwrap_err();
        assert!(matches!(err, ForecastError::EmptyBody));
        assert_eq!(err.exit_code(), 2);
        assert!(!outputs.csv.exists());
        assert!(!outputs.json.exists());
    }

    #[tokio::test]
    async fn empty_200_response_stops_before_writing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        let source = HttpForecastSource::new(server.uri(), &HttpSettings::default()).expect("client builds");
        let dir = tempfile::tempdir().expect("tempdir");
        let outputs = OutputPaths::in_dir(dir.path());

        let err = run(&source, &outputs).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!outputs.csv.exists());
        assert!(!outputs.json.exists());
    }

    #[tokio::test]
    async fn malformed_body_stops_before_writing() {
        let (_dir, outputs, res) = run_static("not json").await;

        assert_eq!(res.unwrap_err().kind(), ErrorKind::Parse);
        assert!(!outputs.csv.exists());
        assert!(!outputs.json.exists());
    }

    #[tokio::test]
    async fn object_body_stops_before_writing() {
        let (_dir, outputs, res) = run_static("{}").await;

        assert_eq!(res.unwrap_err().kind(), ErrorKind::Schema);
        assert!(!outputs.csv.exists());
        assert!(!outputs.json.exists());
    }

    #[tokio::test]
    async fn wrong_typed_field_stops_before_writing() {
        let (_dir, outputs, res) = run_static(r#"[{"min_temp":"cold"}]"#).await;

        assert_eq!(res.unwrap_err().kind(), ErrorKind::FieldType);
        assert!(!outputs.csv.exists());
    }

    #[tokio::test]
    async fn transport_failure_stops_before_writing() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };
        let source = HttpForecastSource::new(format!("http://127.0.0.1:{port}/"), &HttpSettings::default())
            .expect("client builds");
        let dir = tempfile::tempdir().expect("tempdir");
        let outputs = OutputPaths::in_dir(dir.path());

        let err = run(&source, &outputs).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(!outputs.csv.exists());
        assert!(!outputs.json.exists());
    }

    #[tokio::test]
    async fn end_to_end_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .mount(&server)
            .await;
        let source = HttpForecastSource::new(server.uri(), &HttpSettings::default()).expect("client builds");
        let dir = tempfile::tempdir().expect("tempdir");
        let outputs = OutputPaths::in_dir(dir.path());

        let summary = run(&source, &outputs).await.expect("pipeline succeeds");

        assert_eq!(summary.records, 2);
        assert_eq!(summary.outputs, outputs);
        assert!(outputs.csv.exists());
        assert!(outputs.json.exists());
    }
}
