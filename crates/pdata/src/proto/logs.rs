/// A collection of InstrumentationLibraryLogs from a Resource.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceLogs {
    /// The resource for the logs in this message.
    /// If this field is not set then no resource info is known.
    #[prost(message, optional, tag="1")]
    pub resource: ::core::option::Option<super::resource::Resource>,
    /// A list of InstrumentationLibraryLogs that originate from a resource.
    #[prost(message, repeated, tag="2")]
    pub instrumentation_library_logs: ::prost::alloc::vec::Vec<InstrumentationLibraryLogs>,
}
/// A collection of Logs produced by an InstrumentationLibrary.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentationLibraryLogs {
    /// The instrumentation library information for the logs in this message.
    /// If this field is not set then no library info is known.
    #[prost(message, optional, tag="1")]
    pub instrumentation_library: ::core::option::Option<super::common::InstrumentationLibrary>,
    /// A list of log records.
    #[prost(message, repeated, tag="2")]
    pub logs: ::prost::alloc::vec::Vec<LogRecord>,
}
/// A log record according to OpenTelemetry Log Data Model.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogRecord {
    /// time_unix_nano is the time when the event occurred.
    #[prost(fixed64, tag="1")]
    pub time_unix_nano: u64,
    /// Numerical value of the severity, normalized to values described in Log Data Model.
    #[prost(enumeration="SeverityNumber", tag="2")]
    pub severity_number: i32,
    /// The severity text (also known as log level).
    #[prost(string, tag="3")]
    pub severity_text: ::prost::alloc::string::String,
    /// Short event identifier that does not contain varying parts.
    #[prost(string, tag="4")]
    pub name: ::prost::alloc::string::String,
    /// A value containing the body of the log record.
    #[prost(message, optional, tag="5")]
    pub body: ::core::option::Option<super::common::AnyValue>,
    /// Additional attributes that describe the specific event occurrence.
    #[prost(message, repeated, tag="6")]
    pub attributes: ::prost::alloc::vec::Vec<super::common::KeyValue>,
    #[prost(uint32, tag="7")]
    pub dropped_attributes_count: u32,
    /// Flags, a bit field. 8 least significant bits are the trace flags as
    /// defined in W3C Trace Context specification.
    #[prost(fixed32, tag="8")]
    pub flags: u32,
    /// A unique identifier for a trace.
    #[prost(bytes="vec", tag="9")]
    pub trace_id: ::prost::alloc::vec::Vec<u8>,
    /// A unique identifier for a span within a trace.
    #[prost(bytes="vec", tag="10")]
    pub span_id: ::prost::alloc::vec::Vec<u8>,
}
/// Possible values for LogRecord.SeverityNumber.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SeverityNumber {
    /// UNSPECIFIED is the default SeverityNumber, it MUST not be used.
    Unspecified = 0,
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}
