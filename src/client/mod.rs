pub mod executor;

use crate::core::form::FormValues;
use crate::core::user::SubmittedUser;
use crate::error::SubmitError;
use std::time::Duration;

/// Creates a user from the form payload.
pub trait SubmissionClient: Send + Sync {
    fn create_user(&self, payload: &FormValues) -> Result<SubmittedUser, SubmitError>;
}

/// POSTs the payload as JSON and decodes the echoed record.
pub struct HttpClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            endpoint: endpoint.into(),
        }
    }
}

impl SubmissionClient for HttpClient {
    fn create_user(&self, payload: &FormValues) -> Result<SubmittedUser, SubmitError> {
        let response = match self.agent.post(&self.endpoint).send_json(payload) {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(SubmitError::Status { status, body });
            }
            Err(err) => return Err(SubmitError::Transport(err.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| SubmitError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpClient, SubmissionClient};
    use crate::core::form::FormValues;
    use crate::error::SubmitError;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// Serves one canned response and hands back the raw request.
    fn serve_once(status_line: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).expect("write");
            let _ = tx.send(request);
        });

        (format!("http://{addr}/api/users"), rx)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).expect("read");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).into_owned()
    }

    fn payload() -> FormValues {
        FormValues {
            firstname: "Alicee".into(),
            lastname: "Smith".into(),
            email: "a@b.com".into(),
            password: "secret".into(),
            terms: false,
        }
    }

    #[test]
    fn created_user_is_decoded_from_response() {
        let (endpoint, requests) = serve_once(
            "201 Created",
            r#"{"firstname":"Alicee","lastname":"Smith","email":"a@b.com","password":"secret","terms":false,"id":"412","createdAt":"2024-01-01T00:00:00.000Z"}"#,
        );
        let client = HttpClient::new(endpoint, Some(Duration::from_secs(5)));

        let user = client.create_user(&payload()).expect("user");
        assert_eq!(user.id().as_deref(), Some("412"));

        let request = requests.recv().expect("request");
        assert!(request.starts_with("POST /api/users"));
        assert!(request.contains(
            r#"{"firstname":"Alicee","lastname":"Smith","email":"a@b.com","password":"secret","terms":false}"#
        ));
    }

    #[test]
    fn error_status_is_reported() {
        let (endpoint, _requests) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let client = HttpClient::new(endpoint, Some(Duration::from_secs(5)));

        let err = client.create_user(&payload()).expect_err("status error");
        assert_eq!(
            err,
            SubmitError::Status {
                status: 500,
                body: r#"{"error":"boom"}"#.into(),
            }
        );
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        let (endpoint, _requests) = serve_once("201 Created", "[1,2,3]");
        let client = HttpClient::new(endpoint, Some(Duration::from_secs(5)));

        assert!(matches!(
            client.create_user(&payload()),
            Err(SubmitError::Decode(_))
        ));
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("addr");
        let client = HttpClient::new(
            format!("http://{addr}/api/users"),
            Some(Duration::from_secs(2)),
        );

        assert!(matches!(
            client.create_user(&payload()),
            Err(SubmitError::Transport(_))
        ));
    }
}
