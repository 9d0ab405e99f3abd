use chrono::NaiveDate;
use serde_json::{Value, json};

use aanmeld_spec::{FormRecord, RecordError, cafe_form, membership_form, validate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
}

#[test]
fn empty_cafe_record_reports_every_required_field() {
    let spec = cafe_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .set(&spec, "email", json!("not-an-email"))
        .expect("known field");

    let errors = validate(&spec, &record, today());

    for key in [
        "naam",
        "email",
        "lidVanSamenwerkt",
        "komtNaarCafe",
        "telefoonnummer",
    ] {
        assert!(errors.contains_key(key), "expected error for {}", key);
    }
    assert_eq!(errors["email"], "Geldig e-mailadres is verplicht");
    // Optional remarks never error.
    assert!(!errors.contains_key("opmerkingen"));
}

#[test]
fn valid_cafe_record_yields_empty_map() {
    let spec = cafe_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .merge_json(
            &spec,
            &json!({
                "naam": "Jan Jansen",
                "email": "jan@example.com",
                "lidVanSamenwerkt": "ja",
                "komtNaarCafe": "ja",
                "telefoonnummer": "0612345678",
            }),
        )
        .expect("known fields");

    assert!(validate(&spec, &record, today()).is_empty());
}

#[test]
fn validate_is_idempotent_for_unchanged_record() {
    let spec = cafe_form();
    let record = FormRecord::defaults(&spec);

    let first = validate(&spec, &record, today());
    let second = validate(&spec, &record, today());
    assert_eq!(first, second);
}

#[test]
fn choice_outside_allowed_set_is_invalid() {
    let spec = cafe_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .set(&spec, "lidVanSamenwerkt", json!("misschien"))
        .expect("known field");

    let errors = validate(&spec, &record, today());
    assert!(errors.contains_key("lidVanSamenwerkt"));
}

#[test]
fn voluntary_contribution_is_only_checked_for_voluntary_membership() {
    let spec = membership_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .set(&spec, "lidmaatschap", json!("vrijwillig"))
        .expect("known field");
    record
        .set(&spec, "vrijwilligeBijdrage", json!("abc"))
        .expect("known field");

    let errors = validate(&spec, &record, today());
    assert_eq!(errors["vrijwilligeBijdrage"], "Voer een geldig bedrag in.");

    // Empty contribution is permitted for the voluntary type.
    record
        .set(&spec, "vrijwilligeBijdrage", json!(""))
        .expect("known field");
    let errors = validate(&spec, &record, today());
    assert!(!errors.contains_key("vrijwilligeBijdrage"));

    // A standard membership hides the sub-field, garbage and all.
    record
        .set(&spec, "lidmaatschap", json!("standaard"))
        .expect("known field");
    record
        .set(&spec, "vrijwilligeBijdrage", json!("abc"))
        .expect("known field");
    let errors = validate(&spec, &record, today());
    assert!(!errors.contains_key("vrijwilligeBijdrage"));
}

#[test]
fn membership_validates_personal_details() {
    let spec = membership_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .merge_json(
            &spec,
            &json!({
                "naam": "J",
                "adres": "Dorp",
                "geboortedatum": "2015-01-01",
                "telefoon": "12345",
                "email": "jan@",
            }),
        )
        .expect("known fields");

    let errors = validate(&spec, &record, today());
    assert_eq!(
        errors["naam"],
        "Naam is verplicht en moet minimaal 2 karakters bevatten."
    );
    assert_eq!(
        errors["adres"],
        "Adres is verplicht en moet minimaal 5 karakters bevatten."
    );
    assert_eq!(errors["geboortedatum"], "Geboortedatum lijkt niet correct.");
    assert_eq!(errors["telefoon"], "Een geldig telefoonnummer is verplicht.");
    assert_eq!(errors["email"], "Een geldig e-mailadres is verplicht.");
    assert_eq!(errors["lidmaatschap"], "Selecteer een lidmaatschapstype.");
}

#[test]
fn set_rejects_unknown_fields() {
    let spec = cafe_form();
    let mut record = FormRecord::defaults(&spec);

    let result = record.set(&spec, "tussenvoegsel", json!("van"));
    assert_eq!(
        result,
        Err(RecordError::UnknownField("tussenvoegsel".into()))
    );
}

#[test]
fn merge_rejects_non_object_answers() {
    let spec = cafe_form();
    let mut record = FormRecord::defaults(&spec);

    let result = record.merge_json(&spec, &json!(["naam", "Jan Jansen"]));
    assert_eq!(result, Err(RecordError::NotAnObject));
    // The record is untouched by the malformed input.
    assert_eq!(record, FormRecord::defaults(&spec));
}

#[test]
fn merge_accepts_flat_and_nested_group_flags() {
    let spec = membership_form();

    let mut flat = FormRecord::defaults(&spec);
    flat.merge_json(&spec, &json!({ "activiteiten.campagne": true }))
        .expect("known compound key");
    assert!(flat.flag("activiteiten.campagne"));

    let mut nested = FormRecord::defaults(&spec);
    nested
        .merge_json(&spec, &json!({ "activiteiten": { "campagne": true } }))
        .expect("known nested key");
    assert!(nested.flag("activiteiten.campagne"));
}

#[test]
fn payload_nests_flag_groups() {
    let spec = membership_form();
    let mut record = FormRecord::defaults(&spec);
    record
        .merge_json(
            &spec,
            &json!({
                "naam": "Jan Jansen",
                "activiteiten.campagne": true,
                "activiteiten.ict": true,
            }),
        )
        .expect("known fields");

    let payload = record.to_payload(&spec);
    assert_eq!(payload["naam"], Value::String("Jan Jansen".into()));
    assert_eq!(payload["activiteiten"]["campagne"], Value::Bool(true));
    assert_eq!(payload["activiteiten"]["ict"], Value::Bool(true));
    assert_eq!(payload["activiteiten"]["bestuurswerk"], Value::Bool(false));
    // Compound keys never leak into the wire format.
    assert!(payload.get("activiteiten.campagne").is_none());
}

#[test]
fn spec_round_trips_through_json() {
    let spec = membership_form();
    let encoded = serde_json::to_string(&spec).expect("serialize");
    let decoded: aanmeld_spec::FormSpec = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(spec, decoded);
}
