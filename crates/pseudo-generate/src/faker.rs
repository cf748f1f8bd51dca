//! Value generators backed by the `fake` crate.

use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::internet::raw::{DomainSuffix, FreeEmail, IPv4, MACAddress, Username};
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{DE_DE, EN, FR_FR, JA_JP, PT_BR, ZH_CN};
use pseudo_model::{Locale, SemanticType};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::generator::ValueGenerator;
use crate::iban::generate_iban;

/// Upper bound for generated timestamps (2030-12-31 23:59:59 UTC).
const LATEST_TIMESTAMP: i64 = 1_924_991_999;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Dispatch a raw faker over the runtime locale.
macro_rules! localized {
    ($faker:ident, $locale:expr, $rng:expr) => {
        match $locale {
            Locale::En => $faker(EN).fake_with_rng::<String, _>($rng),
            Locale::FrFr => $faker(FR_FR).fake_with_rng::<String, _>($rng),
            Locale::DeDe => $faker(DE_DE).fake_with_rng::<String, _>($rng),
            Locale::PtBr => $faker(PT_BR).fake_with_rng::<String, _>($rng),
            Locale::ZhCn => $faker(ZH_CN).fake_with_rng::<String, _>($rng),
            Locale::JaJp => $faker(JA_JP).fake_with_rng::<String, _>($rng),
        }
    };
}

/// Generates one synthetic value of a fixed semantic type per call.
#[derive(Debug, Clone)]
pub struct FakeValueGenerator {
    semantic_type: SemanticType,
    locale: Locale,
    rng: ChaCha8Rng,
}

impl FakeValueGenerator {
    pub fn new(semantic_type: SemanticType, locale: Locale, rng: ChaCha8Rng) -> Self {
        Self {
            semantic_type,
            locale,
            rng,
        }
    }

    pub fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn address(&mut self) -> String {
        let locale = self.locale;
        let building = localized!(BuildingNumber, locale, &mut self.rng);
        let street = localized!(StreetName, locale, &mut self.rng);
        let city = localized!(CityName, locale, &mut self.rng);
        let state = localized!(StateAbbr, locale, &mut self.rng);
        let zip = localized!(ZipCode, locale, &mut self.rng);
        format!("{building} {street}, {city}, {state} {zip}")
    }

    fn date_time(&mut self) -> String {
        let seconds = self.rng.random_range(0..=LATEST_TIMESTAMP);
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .unwrap_or_default()
            .format(DATE_TIME_FORMAT)
            .to_string()
    }

    fn url(&mut self) -> String {
        let word = Word(EN).fake_with_rng::<String, _>(&mut self.rng);
        let suffix = localized!(DomainSuffix, self.locale, &mut self.rng);
        format!("https://www.{}.{suffix}/", word.to_lowercase())
    }
}

impl ValueGenerator for FakeValueGenerator {
    type Value = String;

    fn generate(&mut self) -> String {
        let locale = self.locale;
        match self.semantic_type {
            SemanticType::Name => localized!(Name, locale, &mut self.rng),
            SemanticType::Address => self.address(),
            SemanticType::CreditCard => localized!(CreditCardNumber, locale, &mut self.rng),
            SemanticType::PhoneNumber => localized!(PhoneNumber, locale, &mut self.rng),
            SemanticType::DateTime => self.date_time(),
            SemanticType::Email => localized!(FreeEmail, locale, &mut self.rng),
            SemanticType::IPv4 => localized!(IPv4, locale, &mut self.rng),
            SemanticType::MacAddress => localized!(MACAddress, locale, &mut self.rng),
            SemanticType::Url => self.url(),
            SemanticType::Username => localized!(Username, locale, &mut self.rng),
            SemanticType::Iban => generate_iban(locale, &mut self.rng),
        }
    }
}
