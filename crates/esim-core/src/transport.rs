//! Order handoff targets.
//!
//! Transports turn an [`OrderIntent`] into the URL the presentation layer
//! redirects to. Every value is percent-encoded; only the unreserved
//! characters `A-Z a-z 0-9 - _ . ~` pass through, so no field can inject an
//! extra parameter.

use std::fmt;

use thiserror::Error;
use urlencoding::encode;

use esim_model::OrderIntent;

/// Errors raised while configuring a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid order endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        endpoint: String,
        reason: &'static str,
    },
}

/// Where the user is sent after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_url(self) -> String {
        self.0
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands an order intent to an external endpoint.
pub trait OrderTransport: fmt::Debug + Send + Sync {
    fn submit(&self, intent: &OrderIntent) -> RedirectTarget;
}

/// Ordered key/value pairs describing an intent, shared by all transports.
#[must_use]
pub fn order_parameters(intent: &OrderIntent) -> Vec<(&'static str, String)> {
    vec![
        ("name", intent.contact.name.clone()),
        ("email", intent.contact.email.clone()),
        ("phone", intent.contact.phone.clone()),
        ("dataset", intent.dataset_kind.to_string()),
        ("region", intent.region.clone()),
        ("data", intent.data_gb.to_string()),
        ("days", intent.validity_days.to_string()),
        ("policy", intent.traffic_policy.clone()),
        ("product_id", intent.product_id.clone()),
        ("price", intent.price_info.clone()),
    ]
}

fn query_string<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Redirects to an order-processing URL with the intent as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStringTransport {
    base_url: String,
}

impl QueryStringTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into();
        let invalid = |reason| TransportError::InvalidEndpoint {
            endpoint: base_url.clone(),
            reason,
        };
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid("expected an http or https URL"));
        }
        if base_url.contains('#') {
            return Err(invalid("fragments are not allowed"));
        }
        Ok(Self { base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl OrderTransport for QueryStringTransport {
    fn submit(&self, intent: &OrderIntent) -> RedirectTarget {
        let params = order_parameters(intent);
        let query = query_string(params.iter().map(|(key, value)| (*key, value.as_str())));
        let separator = match self.base_url.find('?') {
            None => "?",
            Some(at) if at + 1 == self.base_url.len() => "",
            Some(_) => "&",
        };
        RedirectTarget(format!("{}{separator}{query}", self.base_url))
    }
}

/// Opens a pre-filled mail to the order desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoTransport {
    recipient: String,
}

impl MailtoTransport {
    pub fn new(recipient: impl Into<String>) -> Result<Self, TransportError> {
        let recipient = recipient.into();
        let valid = recipient
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty())
            && !recipient.contains(['?', '&', ' ']);
        if !valid {
            return Err(TransportError::InvalidEndpoint {
                endpoint: recipient,
                reason: "expected a plain email address",
            });
        }
        Ok(Self { recipient })
    }
}

impl OrderTransport for MailtoTransport {
    fn submit(&self, intent: &OrderIntent) -> RedirectTarget {
        let subject = format!("eSIM order {}", intent.product_id);
        let body = order_parameters(intent)
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        let query = query_string([("subject", subject.as_str()), ("body", body.as_str())]);
        RedirectTarget(format!("mailto:{}?{query}", self.recipient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esim_model::{ContactDetails, DataAmount, DatasetKind};

    fn intent(name: &str) -> OrderIntent {
        OrderIntent {
            contact: ContactDetails::new(name, "a@x.com", "+44 123"),
            dataset_kind: DatasetKind::Country,
            region: "France".to_string(),
            data_gb: DataAmount::new(5.0).expect("amount"),
            validity_days: 7,
            traffic_policy: "Unlimited".to_string(),
            product_id: "P1".to_string(),
            price_info: "9.99".to_string(),
        }
    }

    #[test]
    fn query_transport_encodes_every_field() {
        let transport = QueryStringTransport::new("http://orders.example/order-process").unwrap();
        let target = transport.submit(&intent("A"));
        insta::assert_snapshot!(
            target.url(),
            @"http://orders.example/order-process?name=A&email=a%40x.com&phone=%2B44%20123&dataset=Country&region=France&data=5&days=7&policy=Unlimited&product_id=P1&price=9.99"
        );
    }

    #[test]
    fn reserved_characters_cannot_inject_parameters() {
        let transport = QueryStringTransport::new("https://orders.example/o").unwrap();
        let target = transport.submit(&intent("A&price=0 =x"));
        assert!(target.url().contains("name=A%26price%3D0%20%3Dx&"));
        assert_eq!(target.url().matches("price=").count(), 1);
    }

    #[test]
    fn existing_query_is_extended() {
        let transport = QueryStringTransport::new("https://orders.example/o?src=web").unwrap();
        let url = transport.submit(&intent("A")).into_url();
        assert!(url.starts_with("https://orders.example/o?src=web&name=A&"));
    }

    #[test]
    fn bare_question_mark_gets_no_extra_separator() {
        let transport = QueryStringTransport::new("https://orders.example/o?").unwrap();
        let url = transport.submit(&intent("A")).into_url();
        assert!(url.starts_with("https://orders.example/o?name=A&"));
    }

    #[test]
    fn rejects_non_http_endpoints() {
        assert!(QueryStringTransport::new("ftp://orders.example").is_err());
        assert!(QueryStringTransport::new("").is_err());
        assert!(QueryStringTransport::new("https://orders.example/#x").is_err());
    }

    #[test]
    fn mailto_transport_builds_subject_and_body() {
        let transport = MailtoTransport::new("orders@example.com").unwrap();
        let url = transport.submit(&intent("A")).into_url();
        assert!(url.starts_with("mailto:orders@example.com?subject=eSIM%20order%20P1&body="));
        assert!(url.contains("name%3A%20A%0Aemail%3A%20a%40x.com"));
        assert!(MailtoTransport::new("not-an-address").is_err());
        assert!(MailtoTransport::new("a@b.com?cc=x@y.com").is_err());
    }
}
