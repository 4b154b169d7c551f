use strum::IntoEnumIterator;
use validador::{
    check_cpf, is_valid_cpf, is_valid_email, validate, validate_tagged, Cpf, CpfNormalization,
    Email, Kind, Policy, Validator,
};

#[test]
fn test_identical_digits_are_never_valid() {
    for d in 0..=9 {
        let cpf = d.to_string().repeat(11);
        assert!(!is_valid_cpf(&cpf), "CPF {} was accepted !", cpf);
        assert!(!validate(&cpf, Kind::Cpf));
    }
}

#[test]
fn test_cpf_check_digits_follow_modulo_11() {
    assert!(!is_valid_cpf("22244466625"));
    assert!(is_valid_cpf("22244466671"));
}

#[test]
fn test_formatted_cpf_needs_digits_only_policy() {
    assert!(!is_valid_cpf("123.456.789-09"));
    assert!(is_valid_cpf("12345678909"));
    assert!(check_cpf("123.456.789-09", CpfNormalization::DigitsOnly).is_ok());
}

#[test]
fn test_sample_emails() {
    assert!(is_valid_email("teste@dominio.com"));
    assert!(is_valid_email("outro@dominio.br"));
    assert!(!is_valid_email("invalid_email@.com"));
    assert!(is_valid_email("erro@dominio..com"));
}

#[test]
fn test_unknown_kind_tag() {
    for value in ["teste@dominio.com", "12345678909", ""] {
        assert!(!validate_tagged(value, "cnpj"));
        assert!(!validate_tagged(value, "telefone"));
    }
    assert!(validate_tagged("12345678909", "cpf"));
}

#[test]
fn test_validators_are_idempotent() {
    let values = ["teste@dominio.com", "erro@dominio..com", "12345678909", "123.456.789-09", ""];

    for value in values {
        for kind in Kind::iter() {
            assert_eq!(validate(value, kind), validate(value, kind));
        }
        assert_eq!(is_valid_cpf(value), is_valid_cpf(value));
        assert_eq!(is_valid_email(value), is_valid_email(value));
    }
}

#[test]
fn test_validators_can_be_shared_between_threads() {
    let validator = Validator::new(Policy::strict());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                validator.validate("222.444.666-71", Kind::Cpf)
                    && validator.validate("outro@dominio.br", Kind::Email)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_wrapper_types() {
    let cpf = Cpf::try_from("22244466671").unwrap();
    assert_eq!(cpf.formatted(), "222.444.666-71");

    let email = Email::try_from("teste@dominio.com").unwrap();
    assert_eq!(email.to_string(), "teste@dominio.com");
}
