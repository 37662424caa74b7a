// Operation registry: logical operation -> wire request type + default version
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// Operations understood by the booking service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Search,
    Valuation,
    BookingInsert,
    BookingStatus,
    BookingSearch,
    AdvancedBookingSearch,
    BookingCancel,
    VoucherDetails,
    BookingInfoForAmendment,
    BookingAmendment,
    HotelInfo,
    PriceBreakdown,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Search,
        Operation::Valuation,
        Operation::BookingInsert,
        Operation::BookingStatus,
        Operation::BookingSearch,
        Operation::AdvancedBookingSearch,
        Operation::BookingCancel,
        Operation::VoucherDetails,
        Operation::BookingInfoForAmendment,
        Operation::BookingAmendment,
        Operation::HotelInfo,
        Operation::PriceBreakdown,
    ];

    // Logical name used in logs and audit records
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::Valuation => "valuation",
            Operation::BookingInsert => "booking-insert",
            Operation::BookingStatus => "booking-status",
            Operation::BookingSearch => "booking-search",
            Operation::AdvancedBookingSearch => "advanced-booking-search",
            Operation::BookingCancel => "booking-cancel",
            Operation::VoucherDetails => "voucher-details",
            Operation::BookingInfoForAmendment => "booking-info-for-amendment",
            Operation::BookingAmendment => "booking-amendment",
            Operation::HotelInfo => "hotel-info",
            Operation::PriceBreakdown => "price-breakdown",
        }
    }

    // Operation name written into the protocol header and the API-Operation header
    pub fn wire_name(&self) -> &'static str {
        match self {
            Operation::Search => "HOTEL_SEARCH_REQUEST",
            Operation::Valuation => "BOOKING_VALUATION_REQUEST",
            Operation::BookingInsert => "BOOKING_INSERT_REQUEST",
            Operation::BookingStatus => "BOOKING_STATUS_REQUEST",
            Operation::BookingSearch => "BOOKING_SEARCH_REQUEST",
            Operation::AdvancedBookingSearch => "ADV_BOOKING_SEARCH_REQUEST",
            Operation::BookingCancel => "BOOKING_CANCEL_REQUEST",
            Operation::VoucherDetails => "VOUCHER_DETAILS_REQUEST",
            Operation::BookingInfoForAmendment => "BOOKING_INFO_FOR_AMENDMENT_REQUEST",
            Operation::BookingAmendment => "BOOKING_AMENDMENT_REQUEST",
            Operation::HotelInfo => "HOTEL_INFO_REQUEST",
            Operation::PriceBreakdown => "PRICE_BREAKDOWN_REQUEST",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// A typed request body. Requests carrying a Version attribute expose it so
// the dispatcher can fill in the registry default.
pub trait OperationRequest: Serialize + Send {
    fn version_slot(&mut self) -> Option<&mut String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub request_type: i64,
    pub default_version: Option<String>,
}

impl OperationSpec {
    pub fn new(request_type: i64, default_version: Option<&str>) -> Self {
        Self {
            request_type,
            default_version: default_version.map(str::to_string),
        }
    }
}

// Read-only after construction; share it behind an Arc
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRegistry {
    entries: HashMap<Operation, OperationSpec>,
}

impl OperationRegistry {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // Catalog used by the current protocol revision.
    // hotel-info is 61 here (6 in older revisions), valuation defaults to 2.4
    // (2.0 in older revisions); override both at startup if the agency's
    // contract says otherwise.
    pub fn standard() -> Self {
        Self::empty()
            .with_entry(Operation::Search, OperationSpec::new(11, Some("2.4")))
            .with_entry(Operation::Valuation, OperationSpec::new(9, Some("2.4")))
            .with_entry(Operation::BookingInsert, OperationSpec::new(2, Some("2.3")))
            .with_entry(Operation::BookingStatus, OperationSpec::new(5, None))
            .with_entry(Operation::BookingSearch, OperationSpec::new(4, Some("2.2")))
            .with_entry(
                Operation::AdvancedBookingSearch,
                OperationSpec::new(10, Some("2.2")),
            )
            .with_entry(Operation::BookingCancel, OperationSpec::new(3, None))
            .with_entry(Operation::VoucherDetails, OperationSpec::new(8, Some("2.3")))
            .with_entry(
                Operation::BookingInfoForAmendment,
                OperationSpec::new(15, None),
            )
            .with_entry(Operation::BookingAmendment, OperationSpec::new(16, None))
            .with_entry(Operation::HotelInfo, OperationSpec::new(61, Some("2.2")))
            .with_entry(Operation::PriceBreakdown, OperationSpec::new(14, Some("2.0")))
    }

    pub fn with_entry(mut self, operation: Operation, spec: OperationSpec) -> Self {
        self.entries.insert(operation, spec);
        self
    }

    pub fn with_request_type(mut self, operation: Operation, request_type: i64) -> Self {
        self.entries
            .entry(operation)
            .or_insert_with(|| OperationSpec::new(request_type, None))
            .request_type = request_type;
        self
    }

    pub fn with_default_version(mut self, operation: Operation, version: Option<&str>) -> Self {
        if let Some(spec) = self.entries.get_mut(&operation) {
            spec.default_version = version.map(str::to_string);
        }
        self
    }

    pub fn contains(&self, operation: Operation) -> bool {
        self.entries.contains_key(&operation)
    }

    // Panics on an unregistered operation: the catalog is fixed at startup,
    // so a miss is a wiring bug rather than a runtime condition.
    pub fn get(&self, operation: Operation) -> &OperationSpec {
        match self.entries.get(&operation) {
            Some(spec) => spec,
            None => panic!("operation {} is not registered", operation),
        }
    }

    pub fn request_type(&self, operation: Operation) -> i64 {
        self.get(operation).request_type
    }

    pub fn default_version(&self, operation: Operation) -> Option<&str> {
        self.get(operation).default_version.as_deref()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Operation::Search, 11, Some("2.4"); "search")]
    #[test_case(Operation::Valuation, 9, Some("2.4"); "valuation")]
    #[test_case(Operation::BookingInsert, 2, Some("2.3"); "booking insert")]
    #[test_case(Operation::BookingStatus, 5, None; "booking status")]
    #[test_case(Operation::BookingSearch, 4, Some("2.2"); "booking search")]
    #[test_case(Operation::AdvancedBookingSearch, 10, Some("2.2"); "advanced booking search")]
    #[test_case(Operation::BookingCancel, 3, None; "booking cancel")]
    #[test_case(Operation::VoucherDetails, 8, Some("2.3"); "voucher details")]
    #[test_case(Operation::BookingInfoForAmendment, 15, None; "booking info for amendment")]
    #[test_case(Operation::BookingAmendment, 16, None; "booking amendment")]
    #[test_case(Operation::HotelInfo, 61, Some("2.2"); "hotel info")]
    #[test_case(Operation::PriceBreakdown, 14, Some("2.0"); "price breakdown")]
    fn test_standard_catalog(operation: Operation, code: i64, version: Option<&str>) {
        let registry = OperationRegistry::standard();
        assert_eq!(registry.request_type(operation), code);
        assert_eq!(registry.default_version(operation), version);
    }

    #[test]
    fn test_every_operation_is_registered() {
        let registry = OperationRegistry::default();
        for operation in Operation::ALL {
            assert!(registry.contains(operation), "{} missing", operation);
        }
    }

    #[test]
    fn test_overrides() {
        let registry = OperationRegistry::standard()
            .with_request_type(Operation::HotelInfo, 6)
            .with_default_version(Operation::Valuation, Some("2.0"))
            .with_default_version(Operation::Search, None);

        assert_eq!(registry.request_type(Operation::HotelInfo), 6);
        assert_eq!(registry.default_version(Operation::HotelInfo), Some("2.2"));
        assert_eq!(registry.default_version(Operation::Valuation), Some("2.0"));
        assert_eq!(registry.default_version(Operation::Search), None);
    }

    #[test]
    #[should_panic(expected = "operation booking-cancel is not registered")]
    fn test_unregistered_operation_panics() {
        let registry = OperationRegistry::empty();
        registry.get(Operation::BookingCancel);
    }

    #[test]
    fn test_names() {
        assert_eq!(Operation::BookingInsert.to_string(), "booking-insert");
        assert_eq!(Operation::HotelInfo.wire_name(), "HOTEL_INFO_REQUEST");
    }
}
