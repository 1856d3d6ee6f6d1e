//! Tag matching, address resolution and substitution through the public API.

use iflowmap::extract::{AddressKeyTable, PropertyMap};
use iflowmap::interchange::parse_document;
use iflowmap::{Manifest, ParameterTable, extract, local_name, substitute};
use rstest::rstest;

#[rstest]
#[case("p:tag", "tag")]
#[case("tag", "tag")]
#[case("bpmn2:messageFlow", "messageFlow")]
#[case("{http://www.omg.org/spec/BPMN/20100524/MODEL}messageFlow", "messageFlow")]
fn test_local_name(#[case] qualified: &str, #[case] expected: &str) {
    assert_eq!(local_name(qualified), expected);
}

#[rstest]
#[case("HTTPS", "Sender", &[("urlPath", "/shop")], Some("/shop"))]
#[case("HTTP", "Receiver", &[("httpAddressWithoutQuery", "http://h/x")], Some("http://h/x"))]
#[case("SFTP", "Receiver", &[("host", "sftp.example.com")], Some("sftp.example.com"))]
#[case("JMS", "Sender", &[("QueueName_inbound", "Q1"), ("brokerUrl", "tcp://b")], Some("Q1"))]
#[case("JMS", "Receiver", &[("QueueName_inbound", "Q1"), ("QueueName_outbound", "Q2")], Some("Q2"))]
#[case("ProcessDirect", "Receiver", &[("address", "/internal")], Some("/internal"))]
#[case("HCIOData", "Receiver", &[("address", "https://odata")], Some("https://odata"))]
#[case("SOAP", "Sender", &[("address", "/soap/in")], Some("/soap/in"))]
#[case("Unknown", "Sender", &[("SomeUrlField", "X")], Some("X"))]
#[case("Unknown", "Sender", &[("Name", "n")], None)]
fn test_resolver_table(
    #[case] component_type: &str,
    #[case] direction: &str,
    #[case] properties: &[(&str, &str)],
    #[case] expected: Option<&str>,
) {
    let props: PropertyMap = properties.iter().copied().collect();
    let table = AddressKeyTable::default();
    assert_eq!(
        table.resolve(Some(component_type), Some(direction), &props),
        expected
    );
}

#[rstest]
#[case("/plain/path", &[], "/plain/path", false)]
#[case("{{host}}/path", &[], "{{host}}/path", true)]
#[case("{{host}}/path", &[("host", "a.b.com")], "a.b.com/path", true)]
#[case("https://{{host}}:{{port}}/x", &[("host", "h")], "https://h:{{port}}/x", true)]
fn test_substitution(
    #[case] address: &str,
    #[case] params: &[(&str, &str)],
    #[case] expected: &str,
    #[case] parametrized: bool,
) {
    let table: ParameterTable = params.iter().copied().collect();
    let result = substitute(address, &table);
    assert_eq!(result.address, expected);
    assert_eq!(result.parametrized, parametrized);
}

#[test]
fn test_discard_rule_regardless_of_other_fields() {
    let doc = parse_document(
        br#"<ns:definitions xmlns:ns="urn:x"><ns:messageFlow><ns:extensionElements>
<ns:property><ns:key>Name</ns:key><ns:value>Populated</ns:value></ns:property>
<ns:property><ns:key>direction</ns:key><ns:value>Sender</ns:value></ns:property>
<ns:property><ns:key>TransportProtocol</ns:key><ns:value>HTTP</ns:value></ns:property>
<ns:property><ns:key>urlPath</ns:key><ns:value>/x</ns:value></ns:property>
</ns:extensionElements></ns:messageFlow></ns:definitions>"#,
    )
    .unwrap();
    assert!(extract(&doc, "F", &ParameterTable::new(), &Manifest::new()).is_empty());
}
