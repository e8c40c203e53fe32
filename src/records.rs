//! Typed records for each record type of a report.
//!
//! _Requires Cargo feature `derive`._
//!
//! Decode a whole report into a [`Report`] with
//! [`decode_slice`](crate::avec::decode_slice). Fields are stored as received;
//! use the accessors for signed amounts.

use alloc::{string::String, vec::Vec};

use crate::avec::{FromRecord, FromRecords, RecordType};

/// Every record of a report, grouped by record type.
///
/// Reserved (`999`) lines are checked but not kept.
#[derive(Debug, Default, FromRecords)]
pub struct Report {
    #[record(900)]
    pub header: Option<FileHeader>,
    #[record(903)]
    pub statements: Vec<StatementHeader>,
    #[record(905)]
    pub transactions: Vec<Transaction>,
    #[record(907)]
    pub footers: Vec<StatementFooter>,
    #[record(909)]
    pub summary: Option<BatchSummary>,
}

/// `900`, opening the report.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct FileHeader {
    #[field(lineno)]
    pub line: Option<usize>,
    #[field("VBDI")]
    pub bank_code: Option<String>,
    #[field("naziv_banke")]
    pub bank_name: Option<String>,
    #[field("OIB_banke")]
    pub bank_oib: Option<String>,
    #[field("vrsta_izvatka")]
    pub statement_kind: Option<String>,
    #[field("datum_obrade")]
    pub processing_date: Option<String>,
}

/// `903`, opening a statement.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct StatementHeader {
    #[field(lineno)]
    pub line: Option<usize>,
    #[field("vodeci_broj_banke")]
    pub bank_code: Option<String>,
    #[field("BIC")]
    pub bic: Option<String>,
    #[field("transakcijski_racun_klijenta")]
    pub account: Option<String>,
    #[field("valuta_transakcijskog_racuna")]
    pub currency: Option<String>,
    #[field("naziv_klijenta")]
    pub client_name: Option<String>,
    #[field("sjediste_klijenta")]
    pub client_seat: Option<String>,
    #[field("maticni_broj")]
    pub registration_number: Option<String>,
    #[field("OIB_klijenta")]
    pub client_oib: Option<String>,
    #[field("redni_broj_izvatka")]
    pub statement_number: Option<i64>,
    #[field("podbroj_izvatka")]
    pub statement_subnumber: Option<i64>,
    #[field("datum_izvatka")]
    pub statement_date: Option<String>,
    #[field("redni_broj_grupe_paketa")]
    pub group_number: Option<i64>,
    #[field("vrsta_izvatka")]
    pub statement_kind: Option<String>,
}

/// `905`, a single transaction of a statement.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct Transaction {
    #[field(lineno)]
    pub line: Option<usize>,
    #[field("oznaka_transakcije")]
    pub kind: Option<String>,
    #[field("racun_primatelja_platitelja")]
    pub counterparty_account: Option<String>,
    #[field("naziv_primatelja_platitelja")]
    pub counterparty_name: Option<String>,
    #[field("adresa_primatelja_platitelja")]
    pub counterparty_address: Option<String>,
    #[field("sjediste_primatelja_platitelja")]
    pub counterparty_seat: Option<String>,
    #[field("datum_valute")]
    pub value_date: Option<String>,
    #[field("datum_izvrsenja")]
    pub execution_date: Option<String>,
    #[field("valuta_pokrica")]
    pub cover_currency: Option<String>,
    #[field("tecaj")]
    pub exchange_rate: Option<i64>,
    #[field("predznak1")]
    pub cover_sign: Option<String>,
    #[field("iznos_u_valuti_pokrica")]
    pub cover_amount: Option<i64>,
    #[field("predznak2")]
    pub sign: Option<String>,
    #[field("iznos")]
    pub amount: Option<i64>,
    #[field("poziv_na_broj_platitelja")]
    pub payer_reference: Option<String>,
    #[field("poziv_na_broj_primatelja")]
    pub payee_reference: Option<String>,
    #[field("sifra_namjene")]
    pub purpose_code: Option<String>,
    #[field("opis_placanja")]
    pub description: Option<String>,
    #[field("identifikator_transakcije1")]
    pub transaction_id: Option<String>,
    #[field("identifikator_transakcije2")]
    pub transaction_id_alt: Option<String>,
}

impl Transaction {
    /// The amount in the account currency, negative for debits.
    pub fn signed_amount(&self) -> Option<i64> {
        signed(&self.sign, self.amount)
    }

    /// The amount in the cover currency, negative for debits.
    pub fn signed_cover_amount(&self) -> Option<i64> {
        signed(&self.cover_sign, self.cover_amount)
    }
}

/// `907`, closing a statement with its balances.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct StatementFooter {
    #[field(lineno)]
    pub line: Option<usize>,
    #[field("transakcijski_racun_klijenta")]
    pub account: Option<String>,
    #[field("valuta_transakcijskog_racuna")]
    pub currency: Option<String>,
    #[field("naziv_klijenta")]
    pub client_name: Option<String>,
    #[field("redni_broj_izvatka")]
    pub statement_number: Option<i64>,
    #[field("redni_broj_prethodnog_izvatka")]
    pub previous_statement_number: Option<i64>,
    #[field("datum_izvatka")]
    pub statement_date: Option<String>,
    #[field("datum_prethodnog_stanja")]
    pub previous_balance_date: Option<String>,
    #[field("predznak_prethodnog_stanja")]
    pub previous_balance_sign: Option<String>,
    #[field("prethodno_stanje")]
    pub previous_balance: Option<i64>,
    #[field("predznak_rezervacije")]
    pub reservation_sign: Option<String>,
    #[field("iznos_rezervacije")]
    pub reservation: Option<i64>,
    #[field("datum_dozvoljenog_prekoracenja")]
    pub overdraft_date: Option<String>,
    #[field("dozvoljeno_prekoracenje")]
    pub overdraft: Option<i64>,
    #[field("iznos_zaplijenjenih_sredstava")]
    pub seized_funds: Option<i64>,
    #[field("predznak_raspolozivog_stanja")]
    pub available_balance_sign: Option<String>,
    #[field("iznos_raspolozivog_stanja")]
    pub available_balance: Option<i64>,
    #[field("predznak_ukupnog_dugovnog_prometa")]
    pub debit_turnover_sign: Option<String>,
    #[field("ukupni_dugovni_promet")]
    pub debit_turnover: Option<i64>,
    #[field("predznak_ukupnog_potraznog_prometa")]
    pub credit_turnover_sign: Option<String>,
    #[field("ukupni_potrazni_promet")]
    pub credit_turnover: Option<i64>,
    #[field("predznak_novog_stanja")]
    pub new_balance_sign: Option<String>,
    #[field("novo_stanje")]
    pub new_balance: Option<i64>,
    #[field("redni_broj_grupe_u_paketu")]
    pub group_number: Option<i64>,
    #[field("broj_stavaka_u_grupi")]
    pub item_count: Option<i64>,
    #[field("tekstualna_poruka")]
    pub message: Option<String>,
}

impl StatementFooter {
    /// The balance of the previous statement, negative when overdrawn.
    pub fn signed_previous_balance(&self) -> Option<i64> {
        signed(&self.previous_balance_sign, self.previous_balance)
    }

    /// The available balance, negative when overdrawn.
    pub fn signed_available_balance(&self) -> Option<i64> {
        signed(&self.available_balance_sign, self.available_balance)
    }

    /// The balance after this statement, negative when overdrawn.
    pub fn signed_new_balance(&self) -> Option<i64> {
        signed(&self.new_balance_sign, self.new_balance)
    }
}

/// `909`, closing the report with its line count.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct BatchSummary {
    #[field(lineno)]
    pub line: Option<usize>,
    #[field("datum_obrade")]
    pub processing_date: Option<String>,
    #[field("broj_grupa")]
    pub group_count: Option<i64>,
    #[field("broj_slogova")]
    pub record_count: Option<i64>,
}

fn signed(sign: &Option<String>, amount: Option<i64>) -> Option<i64> {
    amount.map(|a| if sign.as_deref() == Some("-") { -a } else { a })
}
