//! Field layouts of each record type.

/// Length of every line, in characters.
pub const LINE_LENGTH: usize = 1000;

/// Name of the field holding the record-type code, last in every layout.
pub const RECORD_TYPE_FIELD: &str = "tip_sloga";

/// Name of the field of the closing summary holding the report's line count.
pub const RECORD_COUNT_FIELD: &str = "broj_slogova";

/// Rule converting the trimmed text of a field into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decode {
    /// Text, as found.
    Text,
    /// An integer. Blank text decodes to `0`.
    Numeric,
    /// A `YYYYMMDD` date, rewritten as `YYYY-MM-DD`. Blank text is kept.
    Date,
}

/// A field of a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Length in characters.
    pub length: usize,
    pub decode: Decode,
}

const fn text(name: &'static str, length: usize) -> FieldSpec {
    FieldSpec {
        name,
        length,
        decode: Decode::Text,
    }
}

const fn num(name: &'static str, length: usize) -> FieldSpec {
    FieldSpec {
        name,
        length,
        decode: Decode::Numeric,
    }
}

const fn date(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        length: 8,
        decode: Decode::Date,
    }
}

const fn amount(name: &'static str) -> FieldSpec {
    num(name, 15)
}

const fn currency(name: &'static str) -> FieldSpec {
    text(name, 3)
}

const fn oib(name: &'static str) -> FieldSpec {
    text(name, 11)
}

const fn sign(name: &'static str) -> FieldSpec {
    text(name, 1)
}

const RECORD_TYPE: FieldSpec = num(RECORD_TYPE_FIELD, 3);

const FILE_HEADER: &[FieldSpec] = &[
    text("VBDI", 7),
    text("naziv_banke", 50),
    oib("OIB_banke"),
    text("vrsta_izvatka", 4),
    date("datum_obrade"),
    text("rezerva", 917),
    RECORD_TYPE,
];

const STATEMENT_HEADER: &[FieldSpec] = &[
    text("vodeci_broj_banke", 7),
    text("BIC", 11),
    text("transakcijski_racun_klijenta", 21),
    currency("valuta_transakcijskog_racuna"),
    text("naziv_klijenta", 70),
    text("sjediste_klijenta", 35),
    text("maticni_broj", 8),
    oib("OIB_klijenta"),
    num("redni_broj_izvatka", 3),
    num("podbroj_izvatka", 3),
    date("datum_izvatka"),
    num("redni_broj_grupe_paketa", 4),
    text("vrsta_izvatka", 4),
    text("rezerva", 809),
    RECORD_TYPE,
];

const TRANSACTION: &[FieldSpec] = &[
    text("oznaka_transakcije", 2),
    text("racun_primatelja_platitelja", 34),
    text("naziv_primatelja_platitelja", 70),
    text("adresa_primatelja_platitelja", 35),
    text("sjediste_primatelja_platitelja", 35),
    date("datum_valute"),
    date("datum_izvrsenja"),
    currency("valuta_pokrica"),
    amount("tecaj"),
    sign("predznak1"),
    amount("iznos_u_valuti_pokrica"),
    sign("predznak2"),
    amount("iznos"),
    text("poziv_na_broj_platitelja", 26),
    text("poziv_na_broj_primatelja", 26),
    text("sifra_namjene", 4),
    text("opis_placanja", 140),
    text("identifikator_transakcije1", 42),
    text("identifikator_transakcije2", 35),
    text("rezerva", 482),
    RECORD_TYPE,
];

const STATEMENT_FOOTER: &[FieldSpec] = &[
    text("transakcijski_racun_klijenta", 21),
    currency("valuta_transakcijskog_racuna"),
    text("naziv_klijenta", 70),
    num("redni_broj_izvatka", 3),
    num("redni_broj_prethodnog_izvatka", 3),
    date("datum_izvatka"),
    date("datum_prethodnog_stanja"),
    sign("predznak_prethodnog_stanja"),
    amount("prethodno_stanje"),
    sign("predznak_rezervacije"),
    amount("iznos_rezervacije"),
    date("datum_dozvoljenog_prekoracenja"),
    amount("dozvoljeno_prekoracenje"),
    amount("iznos_zaplijenjenih_sredstava"),
    sign("predznak_raspolozivog_stanja"),
    amount("iznos_raspolozivog_stanja"),
    sign("predznak_ukupnog_dugovnog_prometa"),
    amount("ukupni_dugovni_promet"),
    sign("predznak_ukupnog_potraznog_prometa"),
    amount("ukupni_potrazni_promet"),
    sign("predznak_novog_stanja"),
    amount("novo_stanje"),
    num("redni_broj_grupe_u_paketu", 4),
    num("broj_stavaka_u_grupi", 6),
    text("tekstualna_poruka", 420),
    text("rezerva", 317),
    RECORD_TYPE,
];

const BATCH_SUMMARY: &[FieldSpec] = &[
    date("datum_obrade"),
    num("broj_grupa", 5),
    num(RECORD_COUNT_FIELD, 6),
    text("rezerva", 978),
    RECORD_TYPE,
];

const RESERVED: &[FieldSpec] = &[text("rezerva", 997), RECORD_TYPE];

/// Check a layout covers a whole line and ends in the record-type code.
const fn is_complete(schema: &[FieldSpec]) -> bool {
    let mut total = 0;
    let mut i = 0;

    while i < schema.len() {
        total += schema[i].length;
        i += 1;
    }

    let Some(last) = schema.last() else {
        return false;
    };

    total == LINE_LENGTH && last.length == 3 && matches!(last.decode, Decode::Numeric)
}

const _: () = {
    assert!(is_complete(FILE_HEADER));
    assert!(is_complete(STATEMENT_HEADER));
    assert!(is_complete(TRANSACTION));
    assert!(is_complete(STATEMENT_FOOTER));
    assert!(is_complete(BATCH_SUMMARY));
    assert!(is_complete(RESERVED));
};

/// A record type, selected by the code ending each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// `900`, opening the report.
    FileHeader,
    /// `903`, opening a statement.
    StatementHeader,
    /// `905`, a single transaction of a statement.
    Transaction,
    /// `907`, closing a statement with its balances.
    StatementFooter,
    /// `909`, closing the report with its line count.
    BatchSummary,
    /// `999`, reserved for padding.
    Reserved,
}

impl RecordType {
    /// Every record type, in order of code.
    pub const ALL: [RecordType; 6] = [
        Self::FileHeader,
        Self::StatementHeader,
        Self::Transaction,
        Self::StatementFooter,
        Self::BatchSummary,
        Self::Reserved,
    ];

    /// Select a record type by its three-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "900" => Self::FileHeader,
            "903" => Self::StatementHeader,
            "905" => Self::Transaction,
            "907" => Self::StatementFooter,
            "909" => Self::BatchSummary,
            "999" => Self::Reserved,
            _ => None?,
        })
    }

    /// The numeric code of this record type.
    pub const fn code(self) -> u16 {
        match self {
            Self::FileHeader => 900,
            Self::StatementHeader => 903,
            Self::Transaction => 905,
            Self::StatementFooter => 907,
            Self::BatchSummary => 909,
            Self::Reserved => 999,
        }
    }

    /// The field layout of this record type.
    pub const fn schema(self) -> &'static [FieldSpec] {
        match self {
            Self::FileHeader => FILE_HEADER,
            Self::StatementHeader => STATEMENT_HEADER,
            Self::Transaction => TRANSACTION,
            Self::StatementFooter => STATEMENT_FOOTER,
            Self::BatchSummary => BATCH_SUMMARY,
            Self::Reserved => RESERVED,
        }
    }

    /// The field declaring the report's line count, if this record type has
    /// one.
    pub const fn count_field(self) -> Option<&'static str> {
        match self {
            Self::BatchSummary => Some(RECORD_COUNT_FIELD),
            _ => None,
        }
    }
}

/// Look up the field layout for a record-type code.
pub fn lookup(code: &str) -> Option<&'static [FieldSpec]> {
    RecordType::from_code(code).map(RecordType::schema)
}
