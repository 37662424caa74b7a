use super::common::{lenient_number, BOOKING_REMARKS_AGENT, BOOKING_REMARKS_TARIFF};
use crate::operation::{Operation, OperationRequest};
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoucherDetailsRequest {
    pub go_booking_code: String,
    pub get_emergency_phone: bool,
}

impl OperationRequest for VoucherDetailsRequest {}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VoucherDetailsResponse {
    pub go_booking_code: String,
    pub hotel_name: String,
    pub address: String,
    pub phone: String,
    pub fax: String,
    // 03/Mar/11
    pub check_in_date: String,
    pub room_basis: String,
    #[serde(deserialize_with = "lenient_number")]
    pub nights: i64,
    pub rooms: String,
    pub remarks: String,
    #[serde(rename = "VoucherDownloadURL")]
    pub voucher_download_url: String,
    pub booking_remarks: BookingRemarks,
    pub booked_and_payable_by: String,
    pub supplier_reference_number: String,
    pub emergency_phone: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BookingRemarks {
    // Agent | Tariff
    #[serde(rename = "@Type")]
    pub kind: String,
    #[serde(rename = "Remark")]
    pub remark: Vec<String>,
}

impl BookingRemarks {
    pub fn is_agent(&self) -> bool {
        self.kind.eq_ignore_ascii_case(BOOKING_REMARKS_AGENT)
    }

    pub fn is_tariff(&self) -> bool {
        self.kind.eq_ignore_ascii_case(BOOKING_REMARKS_TARIFF)
    }
}

pub struct VoucherDetailsResolver;

impl Resolver for VoucherDetailsResolver {
    type Request = VoucherDetailsRequest;
    type Main = VoucherDetailsResponse;
    type Output = VoucherDetailsResponse;

    const OPERATION: Operation = Operation::VoucherDetails;

    fn get_result(&self, main: VoucherDetailsResponse) -> VoucherDetailsResponse {
        main
    }
}
