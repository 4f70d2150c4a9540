//! Local stand-in for the package index and the hosting API
//!
//! A `tiny_http` server on an ephemeral port answers canned responses by
//! method and path and records every request it receives. Unknown routes
//! answer 404, which both real services use for "does not exist". A route
//! may answer a sequence of responses (the last one repeats) and may hold
//! each answer back for a delay; every request is answered on its own
//! thread so a stalled route never blocks the others.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

/// A request as the server saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

struct Route {
    responses: Vec<(u16, String)>,
    delay: Duration,
    served: usize,
}

impl Route {
    fn next(&mut self) -> (u16, String, Duration) {
        let index = self.served.min(self.responses.len() - 1);
        self.served += 1;
        let (status, body) = self.responses[index].clone();
        (status, body, self.delay)
    }
}

type Routes = HashMap<(String, String), Route>;

/// Canned responses, keyed by method and path
#[derive(Default)]
pub struct FakeServices {
    routes: Routes,
}

impl FakeServices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(self, path: &str, status: u16, body: &str) -> Self {
        self.route("GET", path, status, body)
    }

    pub fn post(self, path: &str, status: u16, body: &str) -> Self {
        self.route("POST", path, status, body)
    }

    /// Answer successive GETs of `path` with `responses` in order
    pub fn get_sequence(self, path: &str, responses: &[(u16, &str)]) -> Self {
        self.route_with("GET", path, responses, Duration::ZERO)
    }

    /// Answer GETs of `path` only after `delay`
    pub fn stall(self, path: &str, delay: Duration, status: u16, body: &str) -> Self {
        self.route_with("GET", path, &[(status, body)], delay)
    }

    fn route(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.route_with(method, path, &[(status, body)], Duration::ZERO)
    }

    fn route_with(
        mut self,
        method: &str,
        path: &str,
        responses: &[(u16, &str)],
        delay: Duration,
    ) -> Self {
        let route = Route {
            responses: responses.iter().map(|(s, b)| (*s, (*b).to_string())).collect(),
            delay,
            served: 0,
        };
        self.routes.insert((method.to_string(), path.to_string()), route);
        self
    }

    /// Index user page listing `packages`
    pub fn user_page(self, user: &str, packages: &[&str]) -> Self {
        let snippets: String = packages
            .iter()
            .map(|name| {
                format!(
                    "<a class=\"package-snippet\" href=\"/project/{name}/\">\
                     <h3 class=\"package-snippet__title\">{name}</h3></a>\n"
                )
            })
            .collect();
        let heading = match packages.len() {
            0 => "No projects".to_string(),
            1 => "1 project".to_string(),
            n => format!("{n} projects"),
        };
        let html = format!("<html><body><h2>{heading}</h2>\n{snippets}</body></html>");
        self.get(&format!("/user/{user}/"), 200, &html)
    }

    /// Project metadata declaring `source` as its repository
    pub fn project(self, name: &str, source: Option<&str>) -> Self {
        let urls = source.map_or_else(
            || "null".to_string(),
            |url| serde_json::json!({ "Source": url }).to_string(),
        );
        let body = format!("{{\"info\": {{\"author\": null, \"project_urls\": {urls}}}}}");
        self.get(&format!("/pypi/{name}/json"), 200, &body)
    }

    /// Issue opened by `reporter` naming `index_user` in its body
    pub fn issue(
        self,
        owner: &str,
        repo: &str,
        number: u64,
        reporter: &str,
        index_user: &str,
    ) -> Self {
        let body = serde_json::json!({
            "user": { "login": reporter },
            "body": format!("### PyPI Username\n\n{index_user}\n\n### Reason\n\nLost 2FA device"),
            "html_url": format!("https://github.com/{owner}/{repo}/issues/{number}"),
            "created_at": "2024-05-01T12:00:00Z",
        });
        self.get(&format!("/repos/{owner}/{repo}/issues/{number}"), 200, &body.to_string())
    }

    /// Make `user` a public member of `org` with `role`
    pub fn member(self, org: &str, user: &str, role: &str) -> Self {
        let role = serde_json::json!({ "role": role, "state": "active" }).to_string();
        self.get(&format!("/orgs/{org}/members/{user}"), 204, "")
            .get(&format!("/orgs/{org}/memberships/{user}"), 200, &role)
    }

    /// Start serving on an ephemeral local port
    pub fn start(self) -> RunningServices {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        let mut routes = self.routes;

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().as_str().to_uppercase();
                let path = request.url().split('?').next().unwrap_or_default().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                log.lock().unwrap().push(Recorded {
                    method: method.clone(),
                    path: path.clone(),
                    authorization,
                    body,
                });

                let (status, body, delay) = routes.get_mut(&(method, path)).map_or_else(
                    || (404, "{\"message\": \"Not Found\"}".to_string(), Duration::ZERO),
                    Route::next,
                );
                thread::spawn(move || {
                    thread::sleep(delay);
                    let content_type =
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap();
                    let response = Response::from_string(body)
                        .with_status_code(status)
                        .with_header(content_type);
                    let _ = request.respond(response);
                });
            }
        });

        RunningServices {
            base_url: format!("http://{addr}"),
            requests,
        }
    }
}

/// Handle to a started server
pub struct RunningServices {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl RunningServices {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received for `method` and `path`
    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn posts(&self) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.method == "POST").collect()
    }

    /// Config file pointing both services at this server
    pub fn config_toml(&self) -> String {
        format!(
            "[package_index]\nbase_url = \"{base}\"\nmin_interval_ms = 0\n\n\
             [hosting]\napi_url = \"{base}\"\n",
            base = self.base_url
        )
    }
}
