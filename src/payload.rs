use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::LoanApplication;
use crate::decimal::Money;
use crate::types::{DeductionKind, DeductionLineItem, FinancingCategory};
use crate::workflow::ApplicationStatus;

/// one deduction line in the server's audit format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionItemPayload {
    pub nama: String,
    pub kategori: String,
    pub persentase_nominal: Decimal,
    pub nilai: Money,
}

impl DeductionItemPayload {
    fn from_line_item(item: &DeductionLineItem) -> Self {
        Self {
            nama: item.name.clone(),
            kategori: kind_label(item.kind).to_string(),
            persentase_nominal: item.rate_or_amount,
            nilai: item.computed_value,
        }
    }
}

/// loan-creation request body in the server's field vocabulary
///
/// the nested lists stay structured inside the crate; they are flattened
/// to JSON strings only here, because the server stores them in single
/// string columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub nama_nasabah: String,
    pub no_anggota: String,
    pub tanggal_lahir: NaiveDate,
    pub kategori_pembiayaan: String,
    pub gaji_tersedia: Money,
    pub plafond: Money,
    pub jangka_waktu: u32,
    pub angsuran: Money,
    pub total_potongan: Money,
    pub nominal_terima: Money,
    /// JSON-encoded array of [`DeductionItemPayload`]
    pub potongan_detail: String,
    /// JSON-encoded array of attachment URLs
    pub berkas_pendukung: String,
    pub status: String,
}

impl SubmissionPayload {
    /// build the boundary view of an application
    pub fn from_application(application: &LoanApplication) -> Result<Self, serde_json::Error> {
        let items: Vec<DeductionItemPayload> = application
            .deduction_breakdown
            .iter()
            .map(DeductionItemPayload::from_line_item)
            .collect();

        let urls: Vec<&str> = application
            .documents
            .iter()
            .map(|d| d.storage_url.as_str())
            .collect();

        Ok(Self {
            nama_nasabah: application.applicant.name.clone(),
            no_anggota: application.applicant.member_number.clone(),
            tanggal_lahir: application.applicant.birth_date,
            kategori_pembiayaan: category_label(application.category).to_string(),
            gaji_tersedia: application.available_salary,
            plafond: application.principal,
            jangka_waktu: application.tenor_months,
            angsuran: application.installment,
            total_potongan: application.total_deduction,
            nominal_terima: application.net_disbursement,
            potongan_detail: serde_json::to_string(&items)?,
            berkas_pendukung: serde_json::to_string(&urls)?,
            status: status_label(application.status).to_string(),
        })
    }

    /// decode the flattened deduction list back into structured items
    pub fn deduction_items(&self) -> Result<Vec<DeductionItemPayload>, serde_json::Error> {
        serde_json::from_str(&self.potongan_detail)
    }
}

fn kind_label(kind: DeductionKind) -> &'static str {
    match kind {
        DeductionKind::Percentage => "persen",
        DeductionKind::Fixed => "nominal",
    }
}

fn category_label(category: FinancingCategory) -> &'static str {
    match category {
        FinancingCategory::Macro => "makro",
        FinancingCategory::Micro => "mikro",
    }
}

fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Submitted => "diajukan",
        ApplicationStatus::Verified => "diverifikasi",
        ApplicationStatus::Approved => "disetujui",
        ApplicationStatus::Disbursed => "dicairkan",
        ApplicationStatus::Rejected => "ditolak",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    use crate::draft::LoanApplicationDraft;
    use crate::events::EventStore;
    use crate::reference::ReferenceData;
    use crate::types::ApplicantProfile;

    fn submitted_application() -> LoanApplication {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        ));
        let reference = ReferenceData::standard_pension();
        let mut events = EventStore::new();

        let mut draft = LoanApplicationDraft::new();
        draft
            .set_birth_date(
                NaiveDate::from_ymd_opt(1978, 6, 1).unwrap(),
                &reference,
                &time,
            )
            .unwrap();
        draft
            .set_available_salary(Money::from_major(3_000_000), &reference, &time)
            .unwrap();
        draft
            .set_principal_requested(Money::from_major(10_000_000), &reference, &time)
            .unwrap();
        draft.set_tenor_months(24, &reference, &time).unwrap();

        let applicant = ApplicantProfile {
            name: "Sutrisno".to_string(),
            member_number: "KSP-0417".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1978, 6, 1).unwrap(),
        };

        let mut application =
            LoanApplication::submit(applicant, &draft, &time, &mut events).unwrap();
        application.attach_document(
            "ktp.jpg",
            "image/jpeg",
            "https://storage.example/ktp.jpg",
            &time,
            &mut events,
        );
        application
    }

    #[test]
    fn test_payload_field_names() {
        let payload = SubmissionPayload::from_application(&submitted_application()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();

        for key in [
            "nama_nasabah",
            "tanggal_lahir",
            "plafond",
            "jangka_waktu",
            "gaji_tersedia",
            "angsuran",
            "total_potongan",
            "nominal_terima",
            "potongan_detail",
            "berkas_pendukung",
            "status",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(json["status"], "diajukan");
        assert_eq!(json["kategori_pembiayaan"], "makro");
        assert_eq!(json["jangka_waktu"], 24);
    }

    #[test]
    fn test_potongan_detail_is_encoded_string() {
        let payload = SubmissionPayload::from_application(&submitted_application()).unwrap();

        // a JSON array lives inside the string column
        let items: serde_json::Value = serde_json::from_str(&payload.potongan_detail).unwrap();
        let first = &items.as_array().unwrap()[0];
        for key in ["nama", "kategori", "persentase_nominal", "nilai"] {
            assert!(first.get(key).is_some(), "missing field {key}");
        }
    }

    #[test]
    fn test_deduction_items_round_trip() {
        let application = submitted_application();
        let payload = SubmissionPayload::from_application(&application).unwrap();
        let items = payload.deduction_items().unwrap();

        assert_eq!(items.len(), application.deduction_breakdown.len());
        assert_eq!(items[0].nama, application.deduction_breakdown[0].name);
        assert_eq!(items[0].nilai, application.deduction_breakdown[0].computed_value);
    }

    #[test]
    fn test_attachment_urls_encoded() {
        let payload = SubmissionPayload::from_application(&submitted_application()).unwrap();
        let urls: Vec<String> = serde_json::from_str(&payload.berkas_pendukung).unwrap();

        assert_eq!(urls, vec!["https://storage.example/ktp.jpg"]);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(kind_label(DeductionKind::Percentage), "persen");
        assert_eq!(kind_label(DeductionKind::Fixed), "nominal");
    }
}
