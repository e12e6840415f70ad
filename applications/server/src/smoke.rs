/// Smoke checks against a running server
use user_api_client::UserApiClient;
use user_core::UserId;
use uuid::Uuid;

/// ID no smoke run ever creates
const MISSING_USER_ID: u64 = 999_999;

#[derive(Debug, Clone)]
pub struct SmokeCheck {
    pub name: &'static str,
    pub passed: bool,
    pub detail: Option<String>,
}

impl SmokeCheck {
    fn pass(name: &'static str) -> Self {
        tracing::info!(check = name, "Smoke check passed");
        Self {
            name,
            passed: true,
            detail: None,
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::warn!(check = name, detail = %detail, "Smoke check failed");
        Self {
            name,
            passed: false,
            detail: Some(detail),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmokeReport {
    pub checks: Vec<SmokeCheck>,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &SmokeCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Run the smoke sequence
///
/// Order: optional reset, health, create, fetch-back, duplicate rejection,
/// unknown ID. The created user gets a random email so repeated runs against
/// the same server do not collide.
pub async fn run(client: &UserApiClient, reset: bool) -> SmokeReport {
    let mut report = SmokeReport::default();

    if reset {
        report.checks.push(match client.reset().await {
            Ok(_) => SmokeCheck::pass("reset"),
            Err(e) => SmokeCheck::fail("reset", e.to_string()),
        });
    }

    report.checks.push(match client.health().await {
        Ok(health) if health.is_healthy() => SmokeCheck::pass("health"),
        Ok(health) => SmokeCheck::fail("health", format!("status is {:?}", health.status)),
        Err(e) => SmokeCheck::fail("health", e.to_string()),
    });

    let email = format!("smoke.{}@example.com", Uuid::new_v4().simple());
    let created = match client.create_user("Smoke Test User", &email).await {
        Ok(user) if user.email == email => {
            report.checks.push(SmokeCheck::pass("create_user"));
            Some(user)
        }
        Ok(user) => {
            report.checks.push(SmokeCheck::fail(
                "create_user",
                format!("server stored email {:?}", user.email),
            ));
            None
        }
        Err(e) => {
            report.checks.push(SmokeCheck::fail("create_user", e.to_string()));
            None
        }
    };

    report.checks.push(match &created {
        Some(user) => match client.get_user(user.id).await {
            Ok(fetched) if &fetched == user => SmokeCheck::pass("get_user"),
            Ok(_) => SmokeCheck::fail("get_user", "fetched record differs from created one"),
            Err(e) => SmokeCheck::fail("get_user", e.to_string()),
        },
        None => SmokeCheck::fail("get_user", "skipped: user creation failed"),
    });

    report.checks.push(match client.create_user("Smoke Test User", &email).await {
        Err(e) if e.is_conflict() => SmokeCheck::pass("duplicate_email"),
        Err(e) => SmokeCheck::fail("duplicate_email", e.to_string()),
        Ok(user) => SmokeCheck::fail(
            "duplicate_email",
            format!("duplicate accepted with id {}", user.id),
        ),
    });

    report.checks.push(match client.get_user(UserId::new(MISSING_USER_ID)).await {
        Err(e) if e.is_not_found() => SmokeCheck::pass("missing_user"),
        Err(e) => SmokeCheck::fail("missing_user", e.to_string()),
        Ok(user) => SmokeCheck::fail("missing_user", format!("unexpected user {}", user.id)),
    });

    report
}
