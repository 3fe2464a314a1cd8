//! SOAP envelope encoding and decoding for the `updateLine` operation.
//!
//! Only the shapes this application actually exchanges are modelled: the
//! request envelope with a pattern and six call-forward structures, the
//! success response carrying the record id, and the SOAP 1.1 fault with the
//! AXL error detail.

use crate::axl::error::AxlError;
use crate::axl::UpdateLineResponse;
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;

const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// The six forwarding conditions `updateLine` sets, in schema order.
pub const FORWARD_CONDITIONS: [&str; 6] = [
    "callForwardBusy",
    "callForwardBusyInt",
    "callForwardNoAnswer",
    "callForwardNoAnswerInt",
    "callForwardNotRegistered",
    "callForwardNotRegisteredInt",
];

/// Build the `updateLine` request envelope.
///
/// The same destination is replicated across all six forwarding conditions;
/// the AXL schema allows configuring each independently, but this application
/// always sets them identically in one call.
pub fn build_update_line(
    namespace: &str,
    pattern: &str,
    destination: &str,
) -> Result<String, AxlError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| AxlError::Encode(e.to_string()))?;

    let mut envelope = BytesStart::new("soapenv:Envelope");
    envelope.push_attribute(("xmlns:soapenv", SOAP_ENVELOPE_NS));
    envelope.push_attribute(("xmlns:ns", namespace));
    writer
        .write_event(Event::Start(envelope))
        .map_err(|e| AxlError::Encode(e.to_string()))?;

    writer
        .write_event(Event::Empty(BytesStart::new("soapenv:Header")))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::Start(BytesStart::new("soapenv:Body")))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::Start(BytesStart::new("ns:updateLine")))
        .map_err(|e| AxlError::Encode(e.to_string()))?;

    write_text_element(&mut writer, "pattern", pattern)?;

    for condition in FORWARD_CONDITIONS {
        writer
            .write_event(Event::Start(BytesStart::new(condition)))
            .map_err(|e| AxlError::Encode(e.to_string()))?;
        write_text_element(&mut writer, "destination", destination)?;
        writer
            .write_event(Event::End(BytesStart::new(condition).to_end()))
            .map_err(|e| AxlError::Encode(e.to_string()))?;
    }

    writer
        .write_event(Event::End(BytesStart::new("ns:updateLine").to_end()))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::End(BytesStart::new("soapenv:Body").to_end()))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::End(BytesStart::new("soapenv:Envelope").to_end()))
        .map_err(|e| AxlError::Encode(e.to_string()))?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| AxlError::Encode(e.to_string()))
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> Result<(), AxlError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    writer
        .write_event(Event::End(BytesStart::new(name).to_end()))
        .map_err(|e| AxlError::Encode(e.to_string()))?;
    Ok(())
}

/// Parse an `updateLine` response body.
///
/// AXL reports faults as an HTTP 500 with a SOAP 1.1 `Fault` element, so the
/// body is parsed the same way regardless of status code. A fault becomes
/// `AxlError::Fault` with the AXL detail code when present, falling back to
/// the generic SOAP faultcode.
pub fn parse_update_line_response(body: &str) -> Result<UpdateLineResponse, AxlError> {
    let mut reader = Reader::from_str(body);

    let mut in_fault = false;
    let mut saw_response = false;
    let mut current: Vec<u8> = Vec::new();
    let mut fault_code = None;
    let mut fault_string = None;
    let mut axl_code = None;
    let mut axl_message = None;
    let mut record_id = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let local = e.local_name().as_ref().to_vec();
                match local.as_slice() {
                    b"Fault" => in_fault = true,
                    b"updateLineResponse" => saw_response = true,
                    _ => {}
                }
                current = local;
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| AxlError::InvalidResponse(e.to_string()))?
                    .trim()
                    .to_string();
                if text.is_empty() {
                    continue;
                }
                match current.as_slice() {
                    b"faultcode" => fault_code = Some(text),
                    b"faultstring" => fault_string = Some(text),
                    b"axlcode" => axl_code = Some(text),
                    b"axlmessage" => axl_message = Some(text),
                    b"return" if saw_response => record_id = Some(text),
                    _ => {}
                }
            }
            Ok(Event::End(_)) => current.clear(),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AxlError::InvalidResponse(format!(
                    "malformed SOAP response: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    if in_fault {
        let code = axl_code
            .or(fault_code)
            .unwrap_or_else(|| "unknown".to_string());
        let message = axl_message
            .or(fault_string)
            .unwrap_or_else(|| "unspecified AXL fault".to_string());
        return Err(AxlError::Fault { code, message });
    }

    if saw_response {
        return Ok(UpdateLineResponse { record_id });
    }

    Err(AxlError::InvalidResponse(
        "response contains neither updateLineResponse nor Fault".to_string(),
    ))
}
