//! The two built-in form variants: the politiek café sign-up and the full
//! membership registration.

use crate::expr::Expr;
use crate::spec::field::{FieldKind, FieldMessages, FieldSpec};
use crate::spec::form::FormSpec;

/// Selector for the built-in variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Cafe,
    Leden,
}

impl FormVariant {
    pub fn spec(self) -> FormSpec {
        match self {
            FormVariant::Cafe => cafe_form(),
            FormVariant::Leden => membership_form(),
        }
    }
}

/// Sign-up form for the politiek café: five validated fields plus free-form
/// remarks.
pub fn cafe_form() -> FormSpec {
    FormSpec {
        id: "cafe".into(),
        title: "Politiek Café".into(),
        version: "1.0.0".into(),
        description: Some("Aanmelden voor het politiek café van SamenWerkt".into()),
        submit_path: "/cafe".into(),
        fields: vec![
            FieldSpec::new("naam", FieldKind::Text, "Naam")
                .required()
                .messages(FieldMessages::single("Naam is verplicht")),
            FieldSpec::new("email", FieldKind::Email, "E-mailadres")
                .required()
                .messages(FieldMessages::new(
                    "E-mailadres is verplicht",
                    "Geldig e-mailadres is verplicht",
                )),
            FieldSpec::new("lidVanSamenwerkt", FieldKind::Choice, "Ik ben lid van SamenWerkt")
                .required()
                .choices(&["ja", "nee"])
                .messages(FieldMessages::single(
                    "Geef aan of u lid bent van SamenWerkt",
                )),
            FieldSpec::new(
                "komtNaarCafe",
                FieldKind::Choice,
                "Ik kom graag op het politiek café",
            )
            .required()
            .choices(&["ja", "nee"])
            .messages(FieldMessages::single(
                "Geef aan of u naar het politiek café komt",
            )),
            FieldSpec::new("telefoonnummer", FieldKind::Phone, "Telefoonnummer")
                .required()
                .messages(FieldMessages::new(
                    "Telefoonnummer is verplicht",
                    "Geldig telefoonnummer is verplicht (minimaal 8 cijfers)",
                )),
            FieldSpec::new("opmerkingen", FieldKind::TextArea, "Opmerkingen"),
        ],
    }
}

/// Full membership registration: personal details, membership type with a
/// conditional voluntary contribution, the activity flag group, and optional
/// background information.
pub fn membership_form() -> FormSpec {
    let mut fields = vec![
        FieldSpec::new("naam", FieldKind::Text, "Naam")
            .required()
            .min_len(2)
            .messages(FieldMessages::single(
                "Naam is verplicht en moet minimaal 2 karakters bevatten.",
            )),
        FieldSpec::new("adres", FieldKind::Text, "Adres")
            .required()
            .min_len(5)
            .messages(FieldMessages::single(
                "Adres is verplicht en moet minimaal 5 karakters bevatten.",
            )),
        FieldSpec::new("geboortedatum", FieldKind::Date, "Geboortedatum")
            .required()
            .messages(FieldMessages::new(
                "Geboortedatum is verplicht.",
                "Geboortedatum lijkt niet correct.",
            )),
        FieldSpec::new("telefoon", FieldKind::Phone, "Telefoonnummer")
            .required()
            .messages(FieldMessages::single(
                "Een geldig telefoonnummer is verplicht.",
            )),
        FieldSpec::new("email", FieldKind::Email, "E-mailadres")
            .required()
            .messages(FieldMessages::single("Een geldig e-mailadres is verplicht.")),
        FieldSpec::new("lidmaatschap", FieldKind::Choice, "Lidmaatschapstype")
            .required()
            .choices(&["vrijwillig", "standaard", "korting"])
            .messages(FieldMessages::single("Selecteer een lidmaatschapstype.")),
        FieldSpec::new("vrijwilligeBijdrage", FieldKind::Numeric, "Jaarbijdrage")
            .visible_if(Expr::eq("lidmaatschap", "vrijwillig"))
            .messages(FieldMessages::single("Voer een geldig bedrag in.")),
    ];

    for (id, label) in [
        ("communicatie", "Communicatie"),
        ("campagne", "Campagne"),
        ("bestuurswerk", "Bestuurswerk"),
        ("fractielidmaatschap", "Fractielidmaatschap"),
        ("ict", "ICT"),
        ("professioneleKennis", "Professionele kennis"),
        ("anders", "Anders"),
    ] {
        fields.push(FieldSpec::new(id, FieldKind::Flag, label).group("activiteiten"));
    }

    fields.extend([
        FieldSpec::new(
            "andereActiviteiten",
            FieldKind::TextArea,
            "Andere activiteiten",
        )
        .visible_if(Expr::Flag {
            field: "activiteiten.anders".into(),
        }),
        FieldSpec::new("professie", FieldKind::Text, "Professie"),
        FieldSpec::new("vrijwilligerswerk", FieldKind::TextArea, "Vrijwilligerswerk"),
        FieldSpec::new(
            "politiekeErvaring",
            FieldKind::TextArea,
            "Politieke ervaring",
        ),
        FieldSpec::new("interessegebied", FieldKind::TextArea, "Interessegebied"),
        FieldSpec::new(
            "opleidingsachtergrond",
            FieldKind::Text,
            "Opleidingsachtergrond",
        ),
        FieldSpec::new("studierichting", FieldKind::Text, "Studierichting"),
        FieldSpec::new("gepensioneerd", FieldKind::Flag, "Gepensioneerd"),
        FieldSpec::new("studerend", FieldKind::Flag, "Studerend"),
        FieldSpec::new("opmerkingen", FieldKind::TextArea, "Opmerkingen"),
    ]);

    FormSpec {
        id: "leden".into(),
        title: "Lid worden".into(),
        version: "1.0.0".into(),
        description: Some("Aanmelden als lid van SamenWerkt Wijk bij Duurstede".into()),
        submit_path: "/submit".into(),
        fields,
    }
}
