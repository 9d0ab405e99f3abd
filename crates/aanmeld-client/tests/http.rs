use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aanmeld_client::{ApiBase, HttpSubmitter, SubmitError, Submitter};
use aanmeld_spec::cafe_form;

fn cafe_payload() -> serde_json::Value {
    json!({
        "naam": "Jan Jansen",
        "email": "jan@example.com",
        "lidVanSamenwerkt": "ja",
        "komtNaarCafe": "ja",
        "telefoonnummer": "0612345678",
        "opmerkingen": "",
    })
}

async fn submitter_for(server: &MockServer) -> HttpSubmitter {
    let base = ApiBase::new(format!("{}/api", server.uri()));
    HttpSubmitter::new(&base, &cafe_form().submit_path)
}

#[tokio::test]
async fn posts_json_to_the_cafe_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cafe"))
        .and(body_partial_json(json!({ "naam": "Jan Jansen" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Bedankt voor uw aanmelding!",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = submitter_for(&server)
        .await
        .submit(cafe_payload())
        .await
        .expect("accepted");
    assert_eq!(ack.message.as_deref(), Some("Bedankt voor uw aanmelding!"));
}

#[tokio::test]
async fn success_false_becomes_a_rejection_with_the_embedded_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Aanmelding kon niet worden verwerkt.",
        })))
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .await
        .submit(cafe_payload())
        .await
        .expect_err("rejected");
    assert_eq!(
        err,
        SubmitError::Rejected("Aanmelding kon niet worden verwerkt.".into())
    );
}

#[tokio::test]
async fn non_2xx_uses_the_detail_field_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "detail": "Ongeldige gegevens ontvangen." })),
        )
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .await
        .submit(cafe_payload())
        .await
        .expect_err("server error");
    assert_eq!(err.to_string(), "Ongeldige gegevens ontvangen.");
}

#[tokio::test]
async fn non_2xx_with_an_object_detail_digs_out_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": { "success": false, "message": "Fout bij opslaan van gegevens." },
        })))
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .await
        .submit(cafe_payload())
        .await
        .expect_err("server error");
    assert_eq!(err.to_string(), "Fout bij opslaan van gegevens.");
}

#[tokio::test]
async fn non_2xx_without_a_body_falls_back_to_a_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = submitter_for(&server)
        .await
        .submit(cafe_payload())
        .await
        .expect_err("server error");
    assert_eq!(err.to_string(), "Serverfout: 502");
}

#[tokio::test]
async fn unreachable_server_maps_to_the_fixed_connection_message() {
    // Nothing listens here; the connection is refused outright.
    let base = ApiBase::new("http://127.0.0.1:9/api");
    let submitter = HttpSubmitter::new(&base, "/cafe");

    let err = submitter
        .submit(cafe_payload())
        .await
        .expect_err("unreachable");
    assert_eq!(err, SubmitError::Unreachable);
    assert_eq!(
        err.to_string(),
        "Kan geen verbinding maken met de server. Controleer of de server draait."
    );
}
