//! Minimal XML documents for each supported dialect

/// Journal citation with keywords and no reference list
pub const PUBMED_WITH_KEYWORDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM" IndexingMethod="Automated">
      <PMID>31452104</PMID>
      <DateRevised>
        <Year>2020</Year>
        <Month>09</Month>
        <Day>30</Day>
      </DateRevised>
      <Article PubModel="Print-Electronic">
        <Journal>
          <ISSN IssnType="Electronic">1234-5678</ISSN>
          <JournalIssue CitedMedium="Internet">
            <Volume>12</Volume>
            <Issue>4</Issue>
            <PubDate>
              <Year>2019</Year>
              <Month>Aug</Month>
            </PubDate>
          </JournalIssue>
          <Title>Journal of Soil Biology</Title>
          <ISOAbbreviation>J Soil Biol</ISOAbbreviation>
        </Journal>
        <ArticleTitle>Microbial turnover in <i>Arabidopsis</i> rhizosphere soils.</ArticleTitle>
        <Pagination>
          <MedlinePgn>101-109</MedlinePgn>
        </Pagination>
        <ELocationID EIdType="doi" ValidYN="Y">10.1000/jsb.2019.04</ELocationID>
        <Abstract>
          <AbstractText Label="BACKGROUND" NlmCategory="BACKGROUND">Soil CO<sub>2</sub> flux varies with root activity.</AbstractText>
          <AbstractText Label="RESULTS" NlmCategory="RESULTS">Turnover doubled near roots.</AbstractText>
        </Abstract>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Rivera</LastName>
            <ForeName>Ana</ForeName>
            <Initials>A</Initials>
            <AffiliationInfo>
              <Affiliation>Department of Soil Science, Example University.</Affiliation>
            </AffiliationInfo>
          </Author>
          <Author ValidYN="Y">
            <LastName>Chen</LastName>
            <ForeName>Wei</ForeName>
            <Initials>W</Initials>
          </Author>
        </AuthorList>
        <Language>eng</Language>
        <PublicationTypeList>
          <PublicationType UI="D016428">Journal Article</PublicationType>
        </PublicationTypeList>
      </Article>
      <MedlineJournalInfo>
        <Country>England</Country>
        <MedlineTA>J Soil Biol</MedlineTA>
        <NlmUniqueID>101234567</NlmUniqueID>
        <ISSNLinking>1234-5678</ISSNLinking>
      </MedlineJournalInfo>
      <MeshHeadingList>
        <MeshHeading>
          <DescriptorName UI="D012988" MajorTopicYN="Y">Soil Microbiology</DescriptorName>
        </MeshHeading>
      </MeshHeadingList>
      <KeywordList Owner="NOTNLM">
        <Keyword MajorTopicYN="N">metagenomics</Keyword>
        <Keyword MajorTopicYN="N">rhizosphere</Keyword>
      </KeywordList>
    </MedlineCitation>
    <PubmedData>
      <History>
        <PubMedPubDate PubStatus="received">
          <Year>2019</Year>
          <Month>3</Month>
          <Day>11</Day>
        </PubMedPubDate>
        <PubMedPubDate PubStatus="pubmed">
          <Year>2019</Year>
          <Month>8</Month>
          <Day>27</Day>
        </PubMedPubDate>
      </History>
      <PublicationStatus>ppublish</PublicationStatus>
      <ArticleIdList>
        <ArticleId IdType="pubmed">31452104</ArticleId>
        <ArticleId IdType="doi">10.1000/jsb.2019.04</ArticleId>
      </ArticleIdList>
    </PubmedData>
  </PubmedArticle>
</PubmedArticleSet>
"#;

/// Two citations: the first has repeated keyword lists, references and an
/// element the model does not map; the second has none of those
pub const PUBMED_WITH_UNKNOWN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="PubMed-not-MEDLINE" Owner="NLM">
      <PMID>28000001</PMID>
      <Article PubModel="Electronic">
        <Journal>
          <JournalIssue CitedMedium="Internet">
            <PubDate>
              <MedlineDate>2016 Nov-Dec</MedlineDate>
            </PubDate>
          </JournalIssue>
          <Title>Example Reports</Title>
          <ISOAbbreviation>Ex Rep</ISOAbbreviation>
        </Journal>
        <ArticleTitle>Case series.</ArticleTitle>
        <Language>eng</Language>
      </Article>
      <MedlineJournalInfo>
        <Country>United States</Country>
        <MedlineTA>Ex Rep</MedlineTA>
        <NlmUniqueID>100000001</NlmUniqueID>
      </MedlineJournalInfo>
      <KeywordList Owner="NOTNLM">
        <Keyword MajorTopicYN="N">case report</Keyword>
      </KeywordList>
      <KeywordList Owner="NLM">
        <Keyword MajorTopicYN="Y">rare disease</Keyword>
      </KeywordList>
    </MedlineCitation>
    <PubmedData>
      <PublicationStatus>epublish</PublicationStatus>
      <ArticleIdList>
        <ArticleId IdType="pubmed">28000001</ArticleId>
      </ArticleIdList>
      <ReferenceList>
        <Reference>
          <Citation>Smith J. Prior work. Ex Rep. 2010;1:1-2.</Citation>
          <ArticleIdList>
            <ArticleId IdType="pubmed">20000001</ArticleId>
          </ArticleIdList>
        </Reference>
      </ReferenceList>
    </PubmedData>
    <CurationNote>reviewed</CurationNote>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation Status="In-Data-Review" Owner="NLM">
      <PMID>28000002</PMID>
      <Article PubModel="Print">
        <Journal>
          <JournalIssue CitedMedium="Print">
            <PubDate>
              <Year>2017</Year>
            </PubDate>
          </JournalIssue>
          <Title>Example Reports</Title>
          <ISOAbbreviation>Ex Rep</ISOAbbreviation>
        </Journal>
        <ArticleTitle>Follow-up.</ArticleTitle>
      </Article>
      <MedlineJournalInfo>
        <MedlineTA>Ex Rep</MedlineTA>
      </MedlineJournalInfo>
    </MedlineCitation>
    <PubmedData>
      <PublicationStatus>ppublish</PublicationStatus>
    </PubmedData>
  </PubmedArticle>
</PubmedArticleSet>
"#;

/// Book chapter citation
pub const PUBMED_BOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<PubmedBookArticleSet>
  <PubmedBookArticle>
    <BookDocument>
      <PMID>20301295</PMID>
      <ArticleIdList>
        <ArticleId IdType="bookaccession">NBK1116</ArticleId>
      </ArticleIdList>
      <Book>
        <Publisher>
          <PublisherName>University of Washington, Seattle</PublisherName>
          <PublisherLocation>Seattle (WA)</PublisherLocation>
        </Publisher>
        <BookTitle>GeneReviews</BookTitle>
        <PubDate>
          <Year>1993</Year>
        </PubDate>
        <AuthorList Type="editors">
          <Author ValidYN="Y">
            <LastName>Adam</LastName>
            <ForeName>Margaret P</ForeName>
            <Initials>MP</Initials>
          </Author>
        </AuthorList>
        <Medium>Internet</Medium>
      </Book>
      <LocationLabel Type="chapter">Example Syndrome</LocationLabel>
      <ArticleTitle>Example Syndrome</ArticleTitle>
      <Language>eng</Language>
      <AuthorList Type="authors">
        <Author ValidYN="Y">
          <LastName>Novak</LastName>
          <ForeName>Jan</ForeName>
          <Initials>J</Initials>
        </Author>
      </AuthorList>
      <PublicationType UI="D000075">Review</PublicationType>
      <Abstract>
        <AbstractText Label="CLINICAL CHARACTERISTICS">Onset is typically in <i>childhood</i>.</AbstractText>
      </Abstract>
    </BookDocument>
    <PubmedBookData>
      <History>
        <PubMedPubDate PubStatus="pubmed">
          <Year>2010</Year>
          <Month>3</Month>
          <Day>20</Day>
        </PubMedPubDate>
      </History>
      <PublicationStatus>ppublish</PublicationStatus>
      <ArticleIdList>
        <ArticleId IdType="pubmed">20301295</ArticleId>
      </ArticleIdList>
    </PubmedBookData>
  </PubmedBookArticle>
</PubmedBookArticleSet>
"#;

/// JATS article without back matter or floats
pub const PMC_NO_BACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE article PUBLIC "-//NLM//DTD JATS (Z39.96) Journal Archiving and Interchange DTD v1.3 20210610//EN" "JATS-archivearticle1-3.dtd">
<article xmlns:xlink="http://www.w3.org/1999/xlink" article-type="research-article">
  <front>
    <journal-meta>
      <journal-id journal-id-type="nlm-ta">Soil Ecol</journal-id>
      <journal-title-group>
        <journal-title>Soil Ecology</journal-title>
      </journal-title-group>
      <issn pub-type="epub">1932-6203</issn>
      <publisher>
        <publisher-name>Example Press</publisher-name>
      </publisher>
    </journal-meta>
    <article-meta>
      <article-id pub-id-type="pmcid">PMC1234567</article-id>
      <article-id pub-id-type="doi">10.1000/se.2020.15</article-id>
      <title-group>
        <article-title>Root exudates shape <italic>rhizosphere</italic> communities</article-title>
      </title-group>
      <contrib-group>
        <contrib contrib-type="author">
          <name>
            <surname>Okafor</surname>
            <given-names>Chidi</given-names>
          </name>
        </contrib>
        <contrib contrib-type="author" corresp="yes">
          <name>
            <surname>Lindqvist</surname>
            <given-names>Eva</given-names>
          </name>
          <aff id="aff2">Department of Ecology, Example University</aff>
        </contrib>
      </contrib-group>
      <aff id="aff1">Institute of Plant Science</aff>
      <pub-date pub-type="epub">
        <day>14</day>
        <month>2</month>
        <year>2020</year>
      </pub-date>
      <volume>15</volume>
      <abstract>
        <sec>
          <title>Background</title>
          <p>Plants release <italic>exudates</italic> into soil.</p>
        </sec>
      </abstract>
      <kwd-group kwd-group-type="author">
        <kwd>rhizosphere</kwd>
        <kwd>exudates</kwd>
      </kwd-group>
    </article-meta>
  </front>
  <body>
    <sec id="s1">
      <title>Introduction</title>
      <p>First paragraph.</p>
      <p>Second paragraph.</p>
      <sec id="s1.1">
        <title>Scope</title>
      </sec>
    </sec>
  </body>
</article>
"#;

/// Well-formed XML that is none of the supported dialects
pub const FOREIGN_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog>
  <book id="bk101">
    <title>Systems Programming</title>
  </book>
</catalog>
"#;
