// Typed request/reply schemas, one module per operation
pub mod adv_booking_search;
pub mod book_valuation;
pub mod booking_amendment;
pub mod booking_cancel;
pub mod booking_info_for_amendment;
pub mod booking_insert;
pub mod booking_search;
pub mod booking_status;
pub mod common;
pub mod hotel_info;
pub mod hotel_search;
pub mod price_breakdown;
pub mod voucher_details;

pub use adv_booking_search::{AdvBooking, AdvBookingSearchRequest};
pub use book_valuation::{BookValuationRequest, BookValuationResponse, Rates};
pub use booking_amendment::BookingAmendmentRequest;
pub use booking_cancel::{BookingCancelRequest, BookingCancelResponse};
pub use booking_info_for_amendment::{
    AmendmentPerson, AmendmentRemark, AmendmentRemarks, AmendmentRoom, AmendmentRoomType,
    AmendmentRooms, BookingInfoForAmendmentRequest, BookingInfoForAmendmentResponse,
};
pub use booking_insert::{
    BookingInsertRequest, BookingInsertResponse, Commission, ExtraBed, Leader, PaymentInfo,
    PersonName, Preferences, RoomRequest, RoomTypeRequest, RoomsRequest,
};
pub use booking_search::{
    BookingSearchRequest, BookingSearchResponse, GrossPrice, PaymentTransactions, Transaction,
    Vehicle,
};
pub use booking_status::{BookingStatusRequest, BookingStatusResponse, GoBookingCode};
pub use common::*;
pub use hotel_info::{GeoCodes, HotelInfoRequest, HotelInfoResponse, Picture};
pub use hotel_search::{
    CancellationPolicy, HotelSearchOffer, HotelSearchRequest, HotelSearchResult, SearchHeader,
    SearchHotel, SearchRoom, SearchStats,
};
pub use price_breakdown::{PriceBreakdownRequest, PriceBreakdownResponse};
pub use voucher_details::{BookingRemarks, VoucherDetailsRequest, VoucherDetailsResponse};
